use std::{fmt, path::PathBuf};

mod loader;
mod paths;

use log::warn;

use loader::ConfigLoader;
pub use paths::ConfigPaths;

const DEFAULT_PROMPT: &str = "> ";

/// Settings read from the rc file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    color: bool,
    prompt: String,
    start_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            prompt: DEFAULT_PROMPT.to_string(),
            start_dir: None,
        }
    }
}

impl Config {
    /// Loads `~/.burrowrc`, or `override_path` when given.
    ///
    /// A missing default rc file yields the defaults; a missing explicit one
    /// is an error.
    pub fn load(override_path: Option<&str>) -> Result<Self, ConfigError> {
        let paths = match ConfigPaths::new(override_path) {
            Ok(paths) => paths,
            Err(ConfigError::HomeDirNotFound) => {
                warn!("home directory not found, using default settings");
                return Ok(Self::default());
            }
            Err(e) => return Err(e),
        };

        let mut config = Self::default();
        ConfigLoader::new(&paths).load_into(&mut config)?;
        Ok(config)
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The configured start directory, unexpanded.
    pub fn start_dir(&self) -> Option<&str> {
        self.start_dir.as_deref()
    }

    pub(crate) fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "color" => self.color = parse_bool(key, value)?,
            "prompt" => self.prompt = value.to_string(),
            "start_dir" => {
                if value.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        value: value.to_string(),
                    });
                }
                self.start_dir = Some(value.to_string());
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    HomeDirNotFound,
    ConfigFileNotFound(PathBuf),
    IoError(std::io::Error),
    UnknownKey(String),
    InvalidValue { key: String, value: String },
    Malformed(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::HomeDirNotFound => write!(f, "Home directory not found"),
            ConfigError::ConfigFileNotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::UnknownKey(key) => write!(f, "Unknown setting: {}", key),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {}: {}", key, value)
            }
            ConfigError::Malformed(line) => write!(f, "Expected key = value, got: {}", line),
        }
    }
}

impl std::error::Error for ConfigError {}
