//! `[repl]` section: console behavior

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Console settings read from TOML.
///
/// ```toml
/// [repl]
/// show_progress = false
/// history_file = "~/.local/share/doq-coach/history.txt"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Spinner while the simulated client or the rubric is pending
    pub show_progress: bool,
    /// Line history location; `~/` expands to the home directory
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl FileReplConfig {
    /// Resolved history file, defaulting to `<data dir>/doq-coach/history.txt`.
    ///
    /// `None` only when no home or data directory can be found.
    pub fn history_path(&self) -> Option<PathBuf> {
        match self.history_file.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => match path.strip_prefix("~/") {
                Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
                None => Some(PathBuf::from(path)),
            },
            _ => dirs::data_dir().map(|dir| dir.join("doq-coach").join("history.txt")),
        }
    }
}
