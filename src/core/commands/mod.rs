use std::collections::BTreeMap;
use std::io::{self, Write};

mod cat;
mod cd;
mod cp;
mod echo;
mod exit;
mod help;
mod history;
mod ls;
mod mkdir;
mod pwd;
mod rm;
mod rmdir;
mod touch;

pub use cat::CatCommand;
pub use cd::CdCommand;
pub use cp::CpCommand;
pub use echo::EchoCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use history::HistoryCommand;
pub use ls::LsCommand;
pub use mkdir::MkdirCommand;
pub use pwd::PwdCommand;
pub use rm::RmCommand;
pub use rmdir::RmdirCommand;
pub use touch::TouchCommand;

use crate::core::{History, WorkingDir};
use crate::highlight::SyntaxHighlighter;

#[derive(Debug)]
pub enum CommandError {
    NotFound(String),
    InvalidArguments(String),
    ExecutionError(String),
    IoError(io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::NotFound(cmd) => write!(f, "{}: command not found", cmd),
            CommandError::InvalidArguments(msg) => f.write_str(msg),
            CommandError::ExecutionError(msg) => f.write_str(msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        CommandError::IoError(err)
    }
}

/// What the interface loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Everything a handler may read or change while it runs.
pub struct Context<'a> {
    pub cwd: &'a mut WorkingDir,
    pub history: &'a History,
    pub registry: &'a CommandRegistry,
    pub highlighter: &'a SyntaxHighlighter,
    pub out: &'a mut dyn Write,
}

impl Context<'_> {
    /// Prints a failure for one target of a multi-target command.
    pub fn report(&mut self, err: &CommandError) -> Result<(), CommandError> {
        writeln!(self.out, "{}", self.highlighter.highlight_error(&err.to_string()))?;
        Ok(())
    }
}

pub trait Command {
    /// One-line synopsis, starting with the command name.
    fn usage(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Checks the shape of `args` before anything runs or is recorded.
    fn validate(&self, args: &[String]) -> Result<(), CommandError>;

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError>;
}

#[derive(Clone, Debug)]
pub enum CommandType {
    Echo(EchoCommand),
    Pwd(PwdCommand),
    Cd(CdCommand),
    Ls(LsCommand),
    Mkdir(MkdirCommand),
    Rmdir(RmdirCommand),
    Touch(TouchCommand),
    Rm(RmCommand),
    Cat(CatCommand),
    Cp(CpCommand),
    History(HistoryCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl CommandType {
    fn inner(&self) -> &dyn Command {
        match self {
            CommandType::Echo(cmd) => cmd,
            CommandType::Pwd(cmd) => cmd,
            CommandType::Cd(cmd) => cmd,
            CommandType::Ls(cmd) => cmd,
            CommandType::Mkdir(cmd) => cmd,
            CommandType::Rmdir(cmd) => cmd,
            CommandType::Touch(cmd) => cmd,
            CommandType::Rm(cmd) => cmd,
            CommandType::Cat(cmd) => cmd,
            CommandType::Cp(cmd) => cmd,
            CommandType::History(cmd) => cmd,
            CommandType::Help(cmd) => cmd,
            CommandType::Exit(cmd) => cmd,
        }
    }
}

impl Command for CommandType {
    fn usage(&self) -> &'static str {
        self.inner().usage()
    }

    fn description(&self) -> &'static str {
        self.inner().description()
    }

    fn validate(&self, args: &[String]) -> Result<(), CommandError> {
        self.inner().validate(args)
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        self.inner().execute(args, ctx)
    }
}

/// The fixed table of built-in commands.
#[derive(Clone, Debug)]
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        let commands = BTreeMap::from([
            ("echo", CommandType::Echo(EchoCommand)),
            ("pwd", CommandType::Pwd(PwdCommand)),
            ("cd", CommandType::Cd(CdCommand)),
            ("ls", CommandType::Ls(LsCommand)),
            ("mkdir", CommandType::Mkdir(MkdirCommand)),
            ("rmdir", CommandType::Rmdir(RmdirCommand)),
            ("touch", CommandType::Touch(TouchCommand)),
            ("rm", CommandType::Rm(RmCommand)),
            ("cat", CommandType::Cat(CatCommand)),
            ("cp", CommandType::Cp(CpCommand)),
            ("history", CommandType::History(HistoryCommand)),
            ("help", CommandType::Help(HelpCommand)),
            ("exit", CommandType::Exit(ExitCommand)),
        ]);

        Self { commands }
    }

    pub fn lookup(&self, name: &str) -> Option<&CommandType> {
        self.commands.get(name)
    }

    /// Built-ins with their names, in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &CommandType)> + '_ {
        self.commands.iter().map(|(name, cmd)| (*name, cmd))
    }
}

pub(crate) fn expect_no_args(name: &str, args: &[String]) -> Result<(), CommandError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(CommandError::InvalidArguments(format!(
            "{}: too many arguments",
            name
        )))
    }
}

/// Short reason for a failed filesystem call.
pub(crate) fn io_reason(err: &io::Error) -> &'static str {
    match err.kind() {
        io::ErrorKind::NotFound => "No such file or directory",
        io::ErrorKind::AlreadyExists => "File exists",
        io::ErrorKind::IsADirectory => "Is a directory",
        io::ErrorKind::NotADirectory => "Not a directory",
        _ => "Permission denied",
    }
}
