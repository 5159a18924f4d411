use std::{fs, path::Path};

use log::debug;

use super::{io_reason, Command, CommandError, Context, Flow};
use crate::path::tree;

const ALL_EMPTY: &str = "*";

#[derive(Clone, Debug, Default)]
pub struct RmdirCommand;

impl RmdirCommand {
    /// Removes `path` if it is an empty directory. `shown` is the name used
    /// in messages.
    fn remove(&self, cwd: &Path, path: &Path, shown: &str) -> Result<(), CommandError> {
        let fail = |reason: &str| {
            CommandError::ExecutionError(format!(
                "rmdir: failed to remove '{}': {}",
                shown, reason
            ))
        };

        let metadata = fs::symlink_metadata(path).map_err(|e| fail(io_reason(&e)))?;
        if !metadata.is_dir() {
            return Err(fail("Not a directory"));
        }
        if cwd.starts_with(path) {
            return Err(fail("Invalid argument"));
        }
        if !tree::is_empty_dir(path).map_err(|e| fail(io_reason(&e)))? {
            return Err(fail("Directory not empty"));
        }

        fs::remove_dir(path).map_err(|e| fail(io_reason(&e)))?;
        debug!("rmdir: removed {}", path.display());
        Ok(())
    }

    fn remove_all_empty(&self, ctx: &mut Context<'_>) -> Result<(), CommandError> {
        let cwd = ctx.cwd.current().to_path_buf();
        let entries = tree::sorted_entries(&cwd).map_err(|_| {
            CommandError::ExecutionError(format!(
                "rmdir: failed to list contents of '{}': Permission denied",
                cwd.display()
            ))
        })?;

        for entry in entries {
            if !entry.file_type().is_ok_and(|kind| kind.is_dir()) {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if let Err(err) = self.remove(&cwd, &entry.path(), &name) {
                ctx.report(&err)?;
            }
        }
        Ok(())
    }
}

impl Command for RmdirCommand {
    fn usage(&self) -> &'static str {
        "rmdir <directory|*>"
    }

    fn description(&self) -> &'static str {
        "removes an empty directory (* removes every empty one)"
    }

    fn validate(&self, args: &[String]) -> Result<(), CommandError> {
        match args.len() {
            0 => Err(CommandError::InvalidArguments(
                "rmdir: missing operand".to_string(),
            )),
            1 => Ok(()),
            _ => Err(CommandError::InvalidArguments(
                "rmdir: too many arguments (currently only supports one argument)".to_string(),
            )),
        }
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        let target = &args[0];
        if target == ALL_EMPTY {
            self.remove_all_empty(ctx)?;
        } else {
            let path = ctx.cwd.resolve(target);
            self.remove(ctx.cwd.current(), &path, target)?;
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::testing::Sandbox;

    #[test]
    fn test_rmdir_removes_empty_directory() {
        let mut sandbox = Sandbox::new();
        sandbox.mkdir("empty");

        assert_eq!(sandbox.run("rmdir empty"), "");
        assert!(!sandbox.path("empty").exists());
    }

    #[test]
    fn test_rmdir_refuses_non_empty() {
        let mut sandbox = Sandbox::new();
        sandbox.write("full/file.txt", "x");

        assert_eq!(
            sandbox.run("rmdir full"),
            "rmdir: failed to remove 'full': Directory not empty\n"
        );
        assert!(sandbox.path("full/file.txt").exists());
    }

    #[test]
    fn test_rmdir_errors() {
        let mut sandbox = Sandbox::new();
        sandbox.write("file.txt", "x");

        assert_eq!(
            sandbox.run("rmdir file.txt"),
            "rmdir: failed to remove 'file.txt': Not a directory\n"
        );
        assert_eq!(
            sandbox.run("rmdir ghost"),
            "rmdir: failed to remove 'ghost': No such file or directory\n"
        );
        assert_eq!(sandbox.run("rmdir"), "rmdir: missing operand\n");
        assert_eq!(
            sandbox.run("rmdir a b"),
            "rmdir: too many arguments (currently only supports one argument)\n"
        );
    }

    #[test]
    fn test_rmdir_refuses_current_directory() {
        let mut sandbox = Sandbox::new();
        sandbox.mkdir("here");
        sandbox.run("cd here");

        assert_eq!(
            sandbox.run("rmdir ."),
            "rmdir: failed to remove '.': Invalid argument\n"
        );
        assert!(sandbox.path("here").is_dir());
    }

    #[test]
    fn test_rmdir_star_removes_only_empty_directories() {
        let mut sandbox = Sandbox::new();
        sandbox.mkdir("e");
        sandbox.mkdir("also-empty");
        sandbox.write("f/content.txt", "keep me");
        sandbox.write("plain.txt", "");

        let output = sandbox.run("rmdir *");

        assert_eq!(output, "rmdir: failed to remove 'f': Directory not empty\n");
        assert!(!sandbox.path("e").exists());
        assert!(!sandbox.path("also-empty").exists());
        assert_eq!(sandbox.read("f/content.txt"), "keep me");
        assert!(sandbox.path("plain.txt").exists());
        assert_eq!(sandbox.interpreter.history().last(), Some("rmdir *"));
    }
}
