//! Database configuration from TOML (`[database]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which store adapter backs the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// SQLite file at `database.path`
    #[default]
    Sqlite,
    /// Process-local, lost on exit
    Memory,
}

/// Raw database configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDatabaseConfig {
    pub backend: StorageBackend,
    /// SQLite database file
    pub path: PathBuf,
    /// Insert the standard categories when none exist yet
    pub seed_categories: bool,
}

impl Default for FileDatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Sqlite,
            path: PathBuf::from("trivia.db"),
            seed_categories: true,
        }
    }
}
