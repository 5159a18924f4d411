use std::{fs::OpenOptions, io};

use log::{debug, trace};

use super::{Command, CommandError, Context, Flow};

#[derive(Clone, Debug, Default)]
pub struct TouchCommand;

impl Command for TouchCommand {
    fn usage(&self) -> &'static str {
        "touch <file>"
    }

    fn description(&self) -> &'static str {
        "creates an empty file if it does not exist"
    }

    fn validate(&self, args: &[String]) -> Result<(), CommandError> {
        match args.len() {
            0 => Err(CommandError::InvalidArguments(
                "touch: missing file operand".to_string(),
            )),
            1 => Ok(()),
            _ => Err(CommandError::InvalidArguments(
                "touch: too many arguments (currently only supports one file)".to_string(),
            )),
        }
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        let file = &args[0];
        let path = ctx.cwd.resolve(file);

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => debug!("touch: created {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                trace!("touch: {} already exists", path.display());
            }
            Err(e) => {
                let reason = match e.kind() {
                    io::ErrorKind::NotFound
                    | io::ErrorKind::NotADirectory
                    | io::ErrorKind::InvalidInput => "Invalid path",
                    _ => "Permission denied",
                };
                return Err(CommandError::ExecutionError(format!(
                    "touch: cannot create file '{}': {}",
                    file, reason
                )));
            }
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::testing::Sandbox;

    #[test]
    fn test_touch_creates_empty_file() {
        let mut sandbox = Sandbox::new();

        assert_eq!(sandbox.run("touch new.txt"), "");
        assert_eq!(sandbox.read("new.txt"), "");
    }

    #[test]
    fn test_touch_twice_is_silent_and_keeps_content() {
        let mut sandbox = Sandbox::new();
        sandbox.run("touch f");
        sandbox.write("f", "data");

        assert_eq!(sandbox.run("touch f"), "");
        assert_eq!(sandbox.read("f"), "data");
    }

    #[test]
    fn test_touch_missing_parent() {
        let mut sandbox = Sandbox::new();
        assert_eq!(
            sandbox.run("touch nowhere/f"),
            "touch: cannot create file 'nowhere/f': Invalid path\n"
        );
    }

    #[test]
    fn test_touch_under_a_file() {
        let mut sandbox = Sandbox::new();
        sandbox.write("file.txt", "x");

        assert_eq!(
            sandbox.run("touch file.txt/child"),
            "touch: cannot create file 'file.txt/child': Invalid path\n"
        );
    }

    #[test]
    fn test_touch_arity() {
        let mut sandbox = Sandbox::new();

        assert_eq!(sandbox.run("touch"), "touch: missing file operand\n");
        assert_eq!(
            sandbox.run("touch a b"),
            "touch: too many arguments (currently only supports one file)\n"
        );
        assert!(!sandbox.path("a").exists());
    }
}
