use std::io::Write;

use super::{Command, CommandError, Context, Flow};
use crate::path::tree;

const REVERSE_FLAG: &str = "-r";

#[derive(Clone, Debug, Default)]
pub struct LsCommand;

impl Command for LsCommand {
    fn usage(&self) -> &'static str {
        "ls [-r]"
    }

    fn description(&self) -> &'static str {
        "lists the current directory (-r reverses the order)"
    }

    fn validate(&self, args: &[String]) -> Result<(), CommandError> {
        match args {
            [] => Ok(()),
            [flag] if flag == REVERSE_FLAG => Ok(()),
            [_] => Err(CommandError::InvalidArguments(
                "ls: invalid argument (currently only supports -r)".to_string(),
            )),
            _ => Err(CommandError::InvalidArguments(
                "ls: too many arguments (currently only supports one argument)".to_string(),
            )),
        }
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        let cwd = ctx.cwd.current();

        // Collect everything first so a failure prints nothing partial.
        let mut names: Vec<String> = tree::sorted_entries(cwd)
            .map_err(|_| {
                CommandError::ExecutionError(format!(
                    "ls: failed to list contents of '{}': Permission denied",
                    cwd.display()
                ))
            })?
            .iter()
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();

        if args.first().is_some_and(|arg| arg == REVERSE_FLAG) {
            names.reverse();
        }

        for name in names {
            writeln!(ctx.out, "{}", name)?;
        }
        Ok(Flow::Continue)
    }
}
