use std::path::PathBuf;

/// Expands a leading `~` into the invoking user's home directory.
#[derive(Clone, Debug)]
pub struct PathExpander {
    home: Option<PathBuf>,
}

impl PathExpander {
    /// Looks the home directory up once, at construction.
    pub fn new() -> Self {
        Self::with_home(dirs::home_dir())
    }

    pub fn with_home(home: Option<PathBuf>) -> Self {
        Self { home }
    }

    /// Returns the expanded path, or the input unchanged when it has no
    /// expandable `~` prefix or the home directory is unknown.
    pub fn expand(&self, path: &str) -> PathBuf {
        self.expand_tilde(path)
            .unwrap_or_else(|| PathBuf::from(path))
    }

    fn expand_tilde(&self, path: &str) -> Option<PathBuf> {
        let without_tilde = path.strip_prefix('~')?;
        if without_tilde.is_empty() {
            // Just "~"
            return self.home_dir();
        }

        // "~/path"; "~username/path" is taken literally
        let stripped = without_tilde.strip_prefix('/')?;
        let mut home_path = self.home_dir()?;
        for part in stripped.split('/').filter(|part| !part.is_empty()) {
            home_path.push(part);
        }
        Some(home_path)
    }

    pub fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }
}

impl Default for PathExpander {
    fn default() -> Self {
        Self::new()
    }
}
