//! Search term value object

use crate::core::error::DomainError;

/// A substring filter over question text (Value Object)
///
/// Matching is case-insensitive. Only the empty string is rejected;
/// whitespace is a legitimate thing to search for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    term: String,
    folded: String,
}

impl SearchTerm {
    /// Create a search term, rejecting the empty string
    pub fn try_new(term: impl Into<String>) -> Result<Self, DomainError> {
        let term = term.into();
        if term.is_empty() {
            return Err(DomainError::EmptySearchTerm);
        }
        let folded = term.to_lowercase();
        Ok(Self { term, folded })
    }

    /// The term as the caller supplied it
    pub fn as_str(&self) -> &str {
        &self.term
    }

    /// The lower-cased form used for comparisons
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// Whether `text` contains this term, ignoring case
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.folded)
    }
}

impl std::fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.term)
    }
}
