use super::{expect_no_args, Command, CommandError, Context, Flow};

#[derive(Clone, Debug, Default)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn usage(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "exits the shell"
    }

    fn validate(&self, args: &[String]) -> Result<(), CommandError> {
        expect_no_args("exit", args)
    }

    fn execute(&self, _args: &[String], _ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        Ok(Flow::Exit)
    }
}
