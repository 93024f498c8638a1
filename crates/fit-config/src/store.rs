//! Snapshot store configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_user() -> String {
    "default".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Directory holding one snapshot document per user. Empty means the
    /// platform data directory.
    #[serde(default)]
    pub data_dir: String,

    /// User id used when `--user` is not given.
    #[serde(default = "default_user")]
    pub default_user: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
            default_user: default_user(),
        }
    }
}

impl StoreConfig {
    /// Resolve the data directory: the configured path, else
    /// `<platform data dir>/fitcheck`, else `.fitcheck/data`.
    pub fn resolved_data_dir(&self) -> PathBuf {
        if !self.data_dir.is_empty() {
            return PathBuf::from(&self.data_dir);
        }
        dirs::data_dir().map_or_else(
            || PathBuf::from(".fitcheck").join("data"),
            |dir| dir.join("fitcheck"),
        )
    }
}
