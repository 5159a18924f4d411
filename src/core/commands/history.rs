use std::io::Write;

use super::{expect_no_args, Command, CommandError, Context, Flow};

#[derive(Clone, Debug, Default)]
pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn usage(&self) -> &'static str {
        "history"
    }

    fn description(&self) -> &'static str {
        "lists the commands entered this session"
    }

    fn validate(&self, args: &[String]) -> Result<(), CommandError> {
        expect_no_args("history", args)
    }

    fn execute(&self, _args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        if ctx.history.is_empty() {
            writeln!(ctx.out, "No commands in history")?;
            return Ok(Flow::Continue);
        }

        for (number, entry) in ctx.history.numbered() {
            writeln!(ctx.out, "{} {}", number, entry)?;
        }
        Ok(Flow::Continue)
    }
}
