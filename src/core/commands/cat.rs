use std::{
    fs,
    io::{self, Write},
};

use super::{Command, CommandError, Context, Flow};

#[derive(Clone, Debug, Default)]
pub struct CatCommand;

impl Command for CatCommand {
    fn usage(&self) -> &'static str {
        "cat <file> [file]"
    }

    fn description(&self) -> &'static str {
        "prints the contents of one or two files"
    }

    fn validate(&self, args: &[String]) -> Result<(), CommandError> {
        match args.len() {
            1 | 2 => Ok(()),
            _ => Err(CommandError::InvalidArguments(
                "cat: invalid number of arguments (expected one or two files)".to_string(),
            )),
        }
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        for file in args {
            match fs::read(ctx.cwd.resolve(file)) {
                Ok(contents) => {
                    ctx.out.write_all(&contents)?;
                    writeln!(ctx.out)?;
                }
                Err(e) => {
                    let reason = match e.kind() {
                        io::ErrorKind::NotFound => "No such file or directory",
                        _ => "Error reading the file",
                    };
                    let err = CommandError::ExecutionError(format!("cat: {}: {}", file, reason));
                    ctx.report(&err)?;
                }
            }
        }
        Ok(Flow::Continue)
    }
}
