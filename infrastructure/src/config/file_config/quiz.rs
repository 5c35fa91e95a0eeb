//! Quiz configuration from TOML (`[quiz]` section)

use serde::{Deserialize, Serialize};

/// Raw quiz configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Fixed RNG seed; questions are drawn in a reproducible order when set
    pub seed: Option<u64>,
}
