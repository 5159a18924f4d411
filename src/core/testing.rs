//! Sandbox used by the command tests: an interpreter rooted in a fresh
//! temporary directory, with output captured as text.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use super::commands::{Command, CommandError, Context, Flow};
use super::{Interpreter, WorkingDir};
use crate::highlight::SyntaxHighlighter;

pub(crate) struct Sandbox {
    dir: TempDir,
    pub interpreter: Interpreter,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let cwd = WorkingDir::new(dir.path()).expect("temp dir is a directory");

        Self {
            dir,
            interpreter: Interpreter::new(cwd),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, contents).expect("write file");
    }

    pub fn mkdir(&self, relative: &str) {
        fs::create_dir_all(self.path(relative)).expect("create dir");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("read file")
    }

    /// Points `~` at `relative` inside the sandbox for this interpreter only.
    pub fn set_home(&mut self, relative: &str) {
        let home = self.path(relative);
        self.interpreter.parts_mut().0.set_home(Some(home));
    }

    /// Runs `line` through the interpreter and returns everything it printed.
    pub fn run(&mut self, line: &str) -> String {
        let mut out = Vec::new();
        self.interpreter
            .execute_line(line, &mut out)
            .expect("write to buffer");
        String::from_utf8(out).expect("utf-8 output")
    }

    /// Calls a handler directly, bypassing validation and the history log.
    pub fn call(&mut self, command: &dyn Command, args: &[&str]) -> (Result<Flow, CommandError>, String) {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        let highlighter = SyntaxHighlighter::plain();
        let (cwd, history, registry) = self.interpreter.parts_mut();

        let result = {
            let mut ctx = Context {
                cwd,
                history,
                registry,
                highlighter: &highlighter,
                out: &mut out,
            };
            command.execute(&args, &mut ctx)
        };
        out.flush().expect("flush buffer");

        (result, String::from_utf8(out).expect("utf-8 output"))
    }
}
