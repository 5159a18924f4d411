use std::{fs, path::Path};

use log::debug;

use super::{io_reason, Command, CommandError, Context, Flow};
use crate::path::tree;

const RECURSIVE_FLAG: &str = "-r";

/// Operands of a well-formed `cp` invocation.
#[derive(Debug, PartialEq, Eq)]
struct CopyRequest<'a> {
    recursive: bool,
    source: &'a str,
    destination: &'a str,
}

fn parse_operands(args: &[String]) -> Result<CopyRequest<'_>, CommandError> {
    let usage = |msg: String| Err(CommandError::InvalidArguments(msg));

    match args {
        [] => usage("cp: missing file operand".to_string()),
        [only] if only == RECURSIVE_FLAG => usage("cp: missing file operand".to_string()),
        [source] => usage(format!(
            "cp: missing destination file operand after '{}'",
            source
        )),
        [flag, source] if flag == RECURSIVE_FLAG => usage(format!(
            "cp: missing destination file operand after '{}'",
            source
        )),
        _ if args.len() > 3 => usage("cp: too many arguments".to_string()),
        _ if args[1..].iter().any(|arg| arg == RECURSIVE_FLAG) => {
            usage("cp: invalid argument (-r must come before the source)".to_string())
        }
        [source, destination] => Ok(CopyRequest {
            recursive: false,
            source,
            destination,
        }),
        [flag, source, destination] if flag == RECURSIVE_FLAG => Ok(CopyRequest {
            recursive: true,
            source,
            destination,
        }),
        [_, _, _] => usage("cp: invalid argument (currently only supports -r)".to_string()),
        _ => usage("cp: too many arguments".to_string()),
    }
}

#[derive(Clone, Debug, Default)]
pub struct CpCommand;

impl CpCommand {
    fn copy_file(
        &self,
        request: &CopyRequest<'_>,
        source: &Path,
        destination: &Path,
    ) -> Result<(), CommandError> {
        let fail = |reason: &str| {
            CommandError::ExecutionError(format!(
                "cp: failed to copy '{}': {}",
                request.source, reason
            ))
        };

        let metadata = fs::metadata(source).map_err(|e| fail(io_reason(&e)))?;
        if metadata.is_dir() {
            return Err(fail("Is a directory (use -r)"));
        }
        if destination.is_dir() {
            let reason = format!("'{}' already exists as a directory", request.destination);
            return Err(fail(reason.as_str()));
        }
        if tree::same_file(source, destination) {
            return Err(CommandError::ExecutionError(format!(
                "cp: '{}' and '{}' are the same file",
                request.source, request.destination
            )));
        }

        let bytes = fs::copy(source, destination).map_err(|e| fail(io_reason(&e)))?;
        debug!(
            "cp: {} -> {} ({} bytes)",
            source.display(),
            destination.display(),
            bytes
        );
        Ok(())
    }

    fn copy_directory(
        &self,
        request: &CopyRequest<'_>,
        source: &Path,
        destination: &Path,
    ) -> Result<(), CommandError> {
        let fail = |reason: &str| {
            CommandError::ExecutionError(format!(
                "cp: failed to copy '{}': {}",
                request.source, reason
            ))
        };

        let metadata = fs::metadata(source).map_err(|e| fail(io_reason(&e)))?;
        if !metadata.is_dir() {
            return Err(fail("Not a directory"));
        }
        if destination.starts_with(source) {
            return Err(CommandError::ExecutionError(format!(
                "cp: cannot copy a directory, '{}', into itself, '{}'",
                request.source, request.destination
            )));
        }

        let copied = tree::copy_tree(source, destination).map_err(|e| fail(io_reason(&e)))?;
        debug!(
            "cp -r: {} -> {} ({} files)",
            source.display(),
            destination.display(),
            copied
        );
        Ok(())
    }
}

impl Command for CpCommand {
    fn usage(&self) -> &'static str {
        "cp [-r] <source> <destination>"
    }

    fn description(&self) -> &'static str {
        "copies a file, or a directory tree with -r"
    }

    fn validate(&self, args: &[String]) -> Result<(), CommandError> {
        parse_operands(args).map(|_| ())
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        let request = parse_operands(args)?;
        let source = ctx.cwd.resolve(request.source);
        let destination = ctx.cwd.resolve(request.destination);

        if request.recursive {
            self.copy_directory(&request, &source, &destination)?;
        } else {
            self.copy_file(&request, &source, &destination)?;
        }
        Ok(Flow::Continue)
    }
}
