use std::io::Write;

use super::{expect_no_args, Command, CommandError, Context, Flow};

#[derive(Clone, Debug, Default)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn usage(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "prints the list of supported commands"
    }

    fn validate(&self, args: &[String]) -> Result<(), CommandError> {
        expect_no_args("help", args)
    }

    fn execute(&self, _args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        for (_, command) in ctx.registry.iter() {
            writeln!(ctx.out, "{:<32} {}", command.usage(), command.description())?;
        }
        Ok(Flow::Continue)
    }
}
