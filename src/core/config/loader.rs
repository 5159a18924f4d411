use std::fs;

use log::{debug, warn};

use super::{Config, ConfigError, ConfigPaths};

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    pub fn load_into(&self, config: &mut Config) -> Result<(), ConfigError> {
        let path = &self.paths.rc_path;
        if !path.exists() {
            if self.paths.explicit {
                return Err(ConfigError::ConfigFileNotFound(path.clone()));
            }
            debug!("no config at {}, using defaults", path.display());
            return Ok(());
        }

        let content = fs::read_to_string(path)?;
        self.apply(&content, config);
        debug!("loaded config from {}", path.display());
        Ok(())
    }

    /// Applies every valid line; bad lines are logged and skipped.
    fn apply(&self, content: &str, config: &mut Config) {
        for (index, line) in content.lines().enumerate() {
            if let Err(e) = self.process_line(line, config) {
                warn!("{}:{}: {}", self.paths.rc_path.display(), index + 1, e);
            }
        }
    }

    fn process_line(&self, line: &str, config: &mut Config) -> Result<(), ConfigError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| ConfigError::Malformed(line.to_string()))?;

        config.set(key.trim(), strip_quotes(value.trim()))
    }
}

fn strip_quotes(value: &str) -> &str {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));

    if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn loader_paths() -> ConfigPaths {
        ConfigPaths {
            rc_path: PathBuf::from("/nonexistent/.burrowrc"),
            explicit: false,
        }
    }

    #[test]
    fn test_process_line() {
        let paths = loader_paths();
        let loader = ConfigLoader::new(&paths);
        let mut config = Config::default();

        loader.process_line("  prompt = \"burrow> \"  ", &mut config).unwrap();
        assert_eq!(config.prompt(), "burrow> ");

        loader.process_line("# color = off", &mut config).unwrap();
        assert!(config.color());
    }

    #[test]
    fn test_malformed_line() {
        let paths = loader_paths();
        let loader = ConfigLoader::new(&paths);
        let mut config = Config::default();

        assert!(matches!(
            loader.process_line("color off", &mut config),
            Err(ConfigError::Malformed(_))
        ));
    }

    #[test]
    fn test_apply_skips_bad_lines() {
        let paths = loader_paths();
        let loader = ConfigLoader::new(&paths);
        let mut config = Config::default();

        let content = r#"
            # burrow settings
            color = no
            nonsense
            volume = 11
            start_dir = '/srv/data'
        "#;
        loader.apply(content, &mut config);

        assert!(!config.color());
        assert_eq!(config.start_dir(), Some("/srv/data"));
    }

    #[test]
    fn test_missing_default_file_is_fine() {
        let paths = loader_paths();
        let mut config = Config::default();

        ConfigLoader::new(&paths).load_into(&mut config).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("'a b'"), "a b");
        assert_eq!(strip_quotes("\"x\""), "x");
        assert_eq!(strip_quotes("\""), "\"");
        assert_eq!(strip_quotes("plain"), "plain");
    }
}
