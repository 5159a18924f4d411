use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use super::{command::CommandCompleter, path::PathCompleter};
use crate::core::commands::CommandRegistry;
use crate::highlight::SyntaxHighlighter;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

/// Line-editor helper: completion, usage hints and highlighting.
#[derive(Clone, Debug)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    path_completer: PathCompleter,
    highlighter: SyntaxHighlighter,
    cwd: PathBuf,
}

impl ShellCompleter {
    pub fn new(registry: &CommandRegistry, highlighter: SyntaxHighlighter, cwd: &Path) -> Self {
        ShellCompleter {
            command_completer: CommandCompleter::new(registry),
            path_completer: PathCompleter::new(),
            highlighter,
            cwd: cwd.to_path_buf(),
        }
    }

    /// Paths complete relative to this directory.
    pub fn set_cwd(&mut self, cwd: &Path) {
        self.cwd = cwd.to_path_buf();
    }

    fn complete_line(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let line_up_to_cursor = &line[..pos];
        let word_start = line_up_to_cursor
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(idx, c)| idx + c.len_utf8());
        let word = &line_up_to_cursor[word_start..];
        let is_first_word = line_up_to_cursor[..word_start].trim().is_empty();

        let matches = if is_first_word {
            self.command_completer.complete_command(word)
        } else {
            self.path_completer.complete_path(word, &self.cwd)
        };

        (word_start, matches)
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !self.highlighter.is_enabled() {
            return Cow::Borrowed(line);
        }
        Cow::Owned(
            self.highlighter
                .highlight_command(line, |word| self.command_completer.is_known(word)),
        )
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        self.highlighter.is_enabled()
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(self.highlighter.highlight_hint(hint))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        self.command_completer.usage_hint(line.trim_start())
    }
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.complete_line(line, pos))
    }
}
