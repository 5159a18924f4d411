use std::io::Write;

use super::{expect_no_args, Command, CommandError, Context, Flow};

#[derive(Clone, Debug, Default)]
pub struct PwdCommand;

impl Command for PwdCommand {
    fn usage(&self) -> &'static str {
        "pwd"
    }

    fn description(&self) -> &'static str {
        "prints the current working directory"
    }

    fn validate(&self, args: &[String]) -> Result<(), CommandError> {
        expect_no_args("pwd", args)
    }

    fn execute(&self, _args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        writeln!(ctx.out, "{}", ctx.cwd.current().display())?;
        Ok(Flow::Continue)
    }
}
