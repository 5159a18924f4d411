pub mod commands;
pub mod config;
pub mod history;
pub mod interpreter;
pub mod parser;
pub mod state;

pub use history::History;
pub use interpreter::Interpreter;
pub use parser::ParsedCommand;
pub use state::WorkingDir;

#[cfg(test)]
pub(crate) mod testing;
