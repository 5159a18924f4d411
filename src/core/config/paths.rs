use super::ConfigError;
use crate::path::PathExpander;
use std::path::PathBuf;

const RC_FILE: &str = ".burrowrc";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: PathBuf,
    /// Set when the path came from `--config` rather than the default.
    pub explicit: bool,
}

impl ConfigPaths {
    pub fn new(override_path: Option<&str>) -> Result<Self, ConfigError> {
        Self::with_expander(&PathExpander::new(), override_path)
    }

    fn with_expander(
        expander: &PathExpander,
        override_path: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = override_path {
            return Ok(ConfigPaths {
                rc_path: expander.expand(path),
                explicit: true,
            });
        }

        let home = expander.home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Ok(ConfigPaths {
            rc_path: home.join(RC_FILE),
            explicit: false,
        })
    }
}
