//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Raised when a value object or entity cannot be constructed from the
/// input it was given. Callers in the application layer translate these
/// into client-facing error kinds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Search term cannot be empty")]
    EmptySearchTerm,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
