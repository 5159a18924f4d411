use log::debug;

use super::{Command, CommandError, Context, Flow};

#[derive(Clone, Debug, Default)]
pub struct CdCommand;

impl Command for CdCommand {
    fn usage(&self) -> &'static str {
        "cd [directory]"
    }

    fn description(&self) -> &'static str {
        "changes the current directory (home when omitted)"
    }

    fn validate(&self, args: &[String]) -> Result<(), CommandError> {
        if args.len() > 1 {
            return Err(CommandError::InvalidArguments(
                "cd: too many arguments".to_string(),
            ));
        }
        Ok(())
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        match args.first() {
            None => {
                let home_missing = || {
                    CommandError::ExecutionError(
                        "cd: cannot change directory to home directory: No such directory"
                            .to_string(),
                    )
                };
                let home = ctx.cwd.home_dir().ok_or_else(home_missing)?;
                ctx.cwd.change_to(&home).map_err(|_| home_missing())?;
            }
            Some(dir) => {
                let target = ctx.cwd.resolve(dir);
                ctx.cwd.change_to(&target).map_err(|_| {
                    CommandError::ExecutionError(format!(
                        "cd: cannot change directory '{}': No such directory",
                        dir
                    ))
                })?;
            }
        }

        debug!("cd: now in {}", ctx.cwd.current().display());
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::testing::Sandbox;

    #[test]
    fn test_cd_relative_and_parent() {
        let mut sandbox = Sandbox::new();
        sandbox.mkdir("a/b");

        assert_eq!(sandbox.run("cd a/b"), "");
        assert_eq!(sandbox.interpreter.cwd().current(), sandbox.path("a/b"));

        sandbox.run("cd ..");
        assert_eq!(sandbox.interpreter.cwd().current(), sandbox.path("a"));
    }

    #[test]
    fn test_cd_absolute() {
        let mut sandbox = Sandbox::new();
        sandbox.mkdir("x");
        let target = sandbox.path("x");

        sandbox.run(&format!("cd {}", target.display()));
        assert_eq!(sandbox.interpreter.cwd().current(), target);
    }

    #[test]
    fn test_cd_missing_keeps_directory() {
        let mut sandbox = Sandbox::new();

        assert_eq!(
            sandbox.run("cd nonexistent"),
            "cd: cannot change directory 'nonexistent': No such directory\n"
        );
        assert_eq!(sandbox.interpreter.cwd().current(), sandbox.root());
    }

    #[test]
    fn test_cd_to_file_fails() {
        let mut sandbox = Sandbox::new();
        sandbox.write("file.txt", "x");

        assert_eq!(
            sandbox.run("cd file.txt"),
            "cd: cannot change directory 'file.txt': No such directory\n"
        );
        assert_eq!(sandbox.interpreter.cwd().current(), sandbox.root());
    }

    #[test]
    fn test_cd_too_many_arguments() {
        let mut sandbox = Sandbox::new();
        assert_eq!(sandbox.run("cd a b"), "cd: too many arguments\n");
    }

    #[test]
    fn test_cd_home() {
        let mut sandbox = Sandbox::new();
        sandbox.mkdir("home");
        sandbox.set_home("home");

        assert_eq!(sandbox.run("cd"), "");
        assert_eq!(sandbox.interpreter.cwd().current(), sandbox.path("home"));

        sandbox.run("cd ~/..");
        assert_eq!(sandbox.interpreter.cwd().current(), sandbox.root());
    }

    #[test]
    fn test_cd_home_missing() {
        let mut sandbox = Sandbox::new();
        sandbox.set_home("gone");

        assert_eq!(
            sandbox.run("cd"),
            "cd: cannot change directory to home directory: No such directory\n"
        );
        assert_eq!(sandbox.interpreter.cwd().current(), sandbox.root());
    }
}
