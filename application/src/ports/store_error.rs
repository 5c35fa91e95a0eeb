//! Storage error type shared by the store ports

use thiserror::Error;

/// Errors reported by a persistence adapter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store refused the write (foreign key, NOT NULL, CHECK...)
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Anything else: I/O, lock poisoning, malformed rows
    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn is_constraint(&self) -> bool {
        matches!(self, StoreError::Constraint(_))
    }
}
