//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// `EnvFilter` directive, e.g. `"info"` or `"trivia_application=debug"`.
    /// `-v` flags and `RUST_LOG` take precedence.
    pub level: Option<String>,
    /// Also write logs to this file
    pub file: Option<PathBuf>,
}
