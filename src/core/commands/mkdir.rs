use std::{fs, io};

use log::debug;

use super::{Command, CommandError, Context, Flow};
use crate::core::WorkingDir;

#[derive(Clone, Debug, Default)]
pub struct MkdirCommand;

impl MkdirCommand {
    fn create(&self, cwd: &WorkingDir, dir: &str) -> Result<(), CommandError> {
        let fail = |reason: &str| {
            CommandError::ExecutionError(format!(
                "mkdir: cannot create directory '{}': {}",
                dir, reason
            ))
        };

        let path = cwd.resolve(dir);
        if path.symlink_metadata().is_ok() {
            return Err(fail("Already exists"));
        }

        fs::create_dir(&path).map_err(|e| {
            fail(match e.kind() {
                io::ErrorKind::AlreadyExists => "Already exists",
                io::ErrorKind::NotFound => "No such file or directory",
                io::ErrorKind::PermissionDenied => "Permission denied",
                _ => "Invalid path",
            })
        })?;

        debug!("mkdir: created {}", path.display());
        Ok(())
    }
}

impl Command for MkdirCommand {
    fn usage(&self) -> &'static str {
        "mkdir <directory>..."
    }

    fn description(&self) -> &'static str {
        "creates one or more directories"
    }

    fn validate(&self, args: &[String]) -> Result<(), CommandError> {
        if args.is_empty() {
            return Err(CommandError::InvalidArguments(
                "mkdir: needs at least one argument".to_string(),
            ));
        }
        Ok(())
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        for dir in args {
            if let Err(err) = self.create(ctx.cwd, dir) {
                ctx.report(&err)?;
            }
        }
        Ok(Flow::Continue)
    }
}
