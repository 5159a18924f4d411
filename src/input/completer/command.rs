use rustyline::completion::Pair;

use crate::core::commands::{Command, CommandRegistry};

/// Completes and hints built-in command names.
#[derive(Clone, Debug)]
pub struct CommandCompleter {
    /// (name, usage) for every built-in, in name order.
    commands: Vec<(&'static str, &'static str)>,
}

impl CommandCompleter {
    pub fn new(registry: &CommandRegistry) -> Self {
        Self {
            commands: registry
                .iter()
                .map(|(name, cmd)| (name, cmd.usage()))
                .collect(),
        }
    }

    pub fn is_known(&self, word: &str) -> bool {
        self.commands.iter().any(|(name, _)| *name == word)
    }

    pub fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(name, _)| Pair {
                display: name.to_string(),
                replacement: format!("{} ", name),
            })
            .collect()
    }

    /// The rest of the usage line once a full command name has been typed.
    pub fn usage_hint(&self, word: &str) -> Option<String> {
        self.commands
            .iter()
            .find(|(name, _)| *name == word)
            .and_then(|(name, usage)| usage.strip_prefix(name))
            .filter(|rest| !rest.is_empty())
            .map(String::from)
    }
}
