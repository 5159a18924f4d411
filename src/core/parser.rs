use std::fmt;

/// One input line split into a command name and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    name: String,
    args: Vec<String>,
}

impl ParsedCommand {
    /// Splits `line` on runs of whitespace. Returns `None` for blank lines.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace().map(String::from);
        let name = tokens.next()?;

        Some(Self {
            name,
            args: tokens.collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The command with single spaces between tokens.
    pub fn normalized(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ParsedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
