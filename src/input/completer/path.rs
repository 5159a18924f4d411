use std::{fs, path::Path};

use rustyline::completion::Pair;

#[derive(Clone, Debug, Default)]
pub struct PathCompleter;

impl PathCompleter {
    pub fn new() -> Self {
        Self
    }

    /// Completes `incomplete` against the entries of the directory it names,
    /// resolved relative to `base`.
    pub fn complete_path(&self, incomplete: &str, base: &Path) -> Vec<Pair> {
        let (dir_part, file_prefix) = self.split_input(incomplete);
        let dir_to_search = if dir_part.is_empty() {
            base.to_path_buf()
        } else {
            base.join(dir_part)
        };

        self.get_path_matches(&dir_to_search, dir_part, file_prefix)
    }

    /// Splits at the last `/`: the directory as typed and the name prefix.
    fn split_input<'a>(&self, incomplete: &'a str) -> (&'a str, &'a str) {
        match incomplete.rfind('/') {
            Some(idx) => (&incomplete[..=idx], &incomplete[idx + 1..]),
            None => ("", incomplete),
        }
    }

    fn get_path_matches(
        &self,
        dir_to_search: &Path,
        dir_part: &str,
        file_prefix: &str,
    ) -> Vec<Pair> {
        let Ok(entries) = fs::read_dir(dir_to_search) else {
            return Vec::new();
        };

        let show_hidden = file_prefix.starts_with('.');
        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                if !name.starts_with(file_prefix) || (name.starts_with('.') && !show_hidden) {
                    return None;
                }
                Some(self.create_completion_pair(&name, entry.path().is_dir(), dir_part))
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }

    fn create_completion_pair(&self, name: &str, is_dir: bool, dir_part: &str) -> Pair {
        if is_dir {
            Pair {
                display: format!("{}/", name),
                replacement: format!("{}{}/", dir_part, name),
            }
        } else {
            Pair {
                display: name.to_string(),
                replacement: format!("{}{} ", dir_part, name),
            }
        }
    }
}
