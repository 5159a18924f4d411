use std::io::Write;

use super::{Command, CommandError, Context, Flow};

#[derive(Clone, Debug, Default)]
pub struct EchoCommand;

impl Command for EchoCommand {
    fn usage(&self) -> &'static str {
        "echo [text...]"
    }

    fn description(&self) -> &'static str {
        "prints its arguments"
    }

    fn validate(&self, _args: &[String]) -> Result<(), CommandError> {
        Ok(())
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        writeln!(ctx.out, "{}", args.join(" "))?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::testing::Sandbox;

    #[test]
    fn test_echo_joins_with_single_spaces() {
        let mut sandbox = Sandbox::new();
        assert_eq!(sandbox.run("echo  hello    world"), "hello world\n");
    }

    #[test]
    fn test_echo_without_args_prints_blank_line() {
        let mut sandbox = Sandbox::new();
        assert_eq!(sandbox.run("echo"), "\n");
    }
}
