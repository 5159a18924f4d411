use std::fs;

use log::debug;

use super::{io_reason, Command, CommandError, Context, Flow};

#[derive(Clone, Debug, Default)]
pub struct RmCommand;

impl Command for RmCommand {
    fn usage(&self) -> &'static str {
        "rm <file>"
    }

    fn description(&self) -> &'static str {
        "removes a regular file"
    }

    fn validate(&self, args: &[String]) -> Result<(), CommandError> {
        match args.len() {
            0 => Err(CommandError::InvalidArguments(
                "rm: missing operand".to_string(),
            )),
            1 => Ok(()),
            _ => Err(CommandError::InvalidArguments(
                "rm: too many arguments (currently only supports one file)".to_string(),
            )),
        }
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        let file = &args[0];
        let fail = |reason: &str| {
            CommandError::ExecutionError(format!("rm: cannot remove '{}': {}", file, reason))
        };

        let path = ctx.cwd.resolve(file);
        let metadata = fs::metadata(&path).map_err(|e| fail(io_reason(&e)))?;
        if !metadata.is_file() {
            return Err(fail("Not a regular file"));
        }

        fs::remove_file(&path).map_err(|e| fail(io_reason(&e)))?;
        debug!("rm: removed {}", path.display());
        Ok(Flow::Continue)
    }
}
