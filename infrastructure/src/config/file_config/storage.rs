//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_FILE_NAME: &str = "helpdesk.jsonl";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Path of the JSONL record file. `~` expands to the home directory.
    /// Defaults to `<data dir>/civic-helpdesk/helpdesk.jsonl`.
    pub path: Option<String>,
}

impl FileStorageConfig {
    /// Resolve the record file location.
    pub fn resolved_path(&self) -> PathBuf {
        match &self.path {
            Some(p) => expand_home(p),
            None => Self::default_path(),
        }
    }

    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("civic-helpdesk")
            .join(DEFAULT_FILE_NAME)
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
