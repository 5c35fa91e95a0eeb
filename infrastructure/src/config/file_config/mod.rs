//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod database;
mod logging;
mod pagination;
mod quiz;
mod server;

pub use database::{FileDatabaseConfig, StorageBackend};
pub use logging::FileLoggingConfig;
pub use pagination::FilePaginationConfig;
pub use quiz::FileQuizConfig;
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("pagination.questions_per_page cannot be 0")]
    ZeroPageSize,

    #[error("server.port cannot be 0")]
    ZeroPort,

    #[error("database.path cannot be empty when backend is sqlite")]
    EmptyDatabasePath,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Storage settings
    pub database: FileDatabaseConfig,
    /// Question listing settings
    pub pagination: FilePaginationConfig,
    /// Quiz settings
    pub quiz: FileQuizConfig,
    /// Log output settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.pagination.questions_per_page == 0 {
            issues.push(ConfigValidationError::ZeroPageSize);
        }

        if self.server.port == 0 {
            issues.push(ConfigValidationError::ZeroPort);
        }

        if self.database.backend == StorageBackend::Sqlite
            && self.database.path.as_os_str().is_empty()
        {
            issues.push(ConfigValidationError::EmptyDatabasePath);
        }

        issues
    }
}
