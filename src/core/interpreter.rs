use std::io::Write;

use log::debug;

use super::commands::{Command, CommandError, CommandRegistry, Context, Flow};
use super::{History, ParsedCommand, WorkingDir};
use crate::error::ShellError;
use crate::highlight::SyntaxHighlighter;

/// Runs input lines against the built-in commands.
///
/// Owns the working directory and the history log; every outcome, including
/// failures, is written to the output sink passed to [`Interpreter::execute_line`].
pub struct Interpreter {
    cwd: WorkingDir,
    history: History,
    registry: CommandRegistry,
    highlighter: SyntaxHighlighter,
}

impl Interpreter {
    pub fn new(cwd: WorkingDir) -> Self {
        Self {
            cwd,
            history: History::new(),
            registry: CommandRegistry::new(),
            highlighter: SyntaxHighlighter::plain(),
        }
    }

    pub fn with_highlighter(mut self, highlighter: SyntaxHighlighter) -> Self {
        self.highlighter = highlighter;
        self
    }

    pub fn cwd(&self) -> &WorkingDir {
        &self.cwd
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Parses and runs one line.
    ///
    /// Blank lines do nothing. Unknown commands and argument errors are
    /// reported and leave the history untouched; anything that passes
    /// validation is recorded before it runs. Only a failure to write to
    /// `out` is returned as an error.
    pub fn execute_line(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow, ShellError> {
        let Some(parsed) = ParsedCommand::parse(line) else {
            return Ok(Flow::Continue);
        };

        let Some(command) = self.registry.lookup(parsed.name()) else {
            debug!("unknown command: {}", parsed.name());
            self.report(out, &CommandError::NotFound(parsed.name().to_string()))?;
            return Ok(Flow::Continue);
        };

        if let Err(err) = command.validate(parsed.args()) {
            debug!("rejected arguments for {}: {}", parsed.name(), err);
            self.report(out, &err)?;
            return Ok(Flow::Continue);
        }

        self.history.record(parsed.normalized());
        debug!("dispatching: {}", parsed.normalized());

        let mut ctx = Context {
            cwd: &mut self.cwd,
            history: &self.history,
            registry: &self.registry,
            highlighter: &self.highlighter,
            out: &mut *out,
        };

        let flow = match command.execute(parsed.args(), &mut ctx) {
            Ok(flow) => flow,
            Err(CommandError::IoError(err)) => return Err(err.into()),
            Err(err) => {
                debug!("{} failed: {}", parsed.name(), err);
                self.report(out, &err)?;
                Flow::Continue
            }
        };

        out.flush()?;
        Ok(flow)
    }

    #[cfg(test)]
    pub(crate) fn parts_mut(&mut self) -> (&mut WorkingDir, &History, &CommandRegistry) {
        (&mut self.cwd, &self.history, &self.registry)
    }

    fn report(&self, out: &mut dyn Write, err: &CommandError) -> Result<(), ShellError> {
        writeln!(out, "{}", self.highlighter.highlight_error(&err.to_string()))?;
        out.flush()?;
        Ok(())
    }
}
