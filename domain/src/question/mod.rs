//! Question domain.
//!
//! - [`entities::Question`]: a stored trivia question
//! - [`entities::NewQuestion`]: validated input for creating a question
//! - [`search::SearchTerm`]: a non-empty, case-insensitive substring filter

pub mod entities;
pub mod search;
