use std::{
    env, io,
    path::{Path, PathBuf},
};

use crate::error::ShellError;
use crate::path::{normalize, PathExpander};

/// The directory relative arguments are resolved against.
///
/// Always holds an absolute, normalized path that was an existing directory
/// when it was adopted.
#[derive(Debug, Clone)]
pub struct WorkingDir {
    current: PathBuf,
    path_expander: PathExpander,
}

impl WorkingDir {
    pub fn new(start: impl AsRef<Path>) -> Result<Self, ShellError> {
        let start = start.as_ref();
        let absolute = if start.is_absolute() {
            start.to_path_buf()
        } else {
            env::current_dir()?.join(start)
        };

        let current = normalize(&absolute);
        if !current.is_dir() {
            return Err(ShellError::InvalidStartDir(current));
        }

        Ok(Self {
            current,
            path_expander: PathExpander::new(),
        })
    }

    /// Starts in the directory the process was launched from.
    pub fn from_process() -> Result<Self, ShellError> {
        Self::new(env::current_dir()?)
    }

    pub fn current(&self) -> &Path {
        &self.current
    }

    /// Resolves `path` against the current directory without touching the
    /// filesystem.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let expanded = self.path_expander.expand(path);
        if expanded.is_absolute() {
            normalize(&expanded)
        } else {
            normalize(&self.current.join(expanded))
        }
    }

    pub fn home_dir(&self) -> Option<PathBuf> {
        self.path_expander.home_dir()
    }

    #[cfg(test)]
    pub(crate) fn set_home(&mut self, home: Option<PathBuf>) {
        self.path_expander = PathExpander::with_home(home);
    }

    /// Adopts `target` if it is an existing directory.
    pub fn change_to(&mut self, target: &Path) -> io::Result<()> {
        let target = if target.is_absolute() {
            normalize(target)
        } else {
            normalize(&self.current.join(target))
        };

        if !target.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: No such directory", target.display()),
            ));
        }

        self.current = target;
        Ok(())
    }
}
