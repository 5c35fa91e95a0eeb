//! Domain layer for trivia-api
//!
//! This crate contains the entities, value objects and pure algorithms
//! behind the trivia API. It has no dependencies on storage or transport.
//!
//! # Core Concepts
//!
//! ## Browsing
//!
//! Questions are listed in ascending id order and cut into fixed-size,
//! 1-based pages by [`paginate`].
//!
//! ## Quiz
//!
//! A quiz never repeats a question within a session. The client sends the
//! ids it has already seen; [`QuizRound`] filters them out and a
//! [`PoolPicker`] chooses uniformly from whatever is left.

pub mod category;
pub mod core;
pub mod pagination;
pub mod question;
pub mod quiz;

// Re-export commonly used types
pub use category::entities::{Category, CategoryId};
pub use core::error::DomainError;
pub use pagination::{DEFAULT_PAGE_SIZE, PageRequest, paginate};
pub use question::{
    entities::{NewQuestion, Question, QuestionId},
    search::SearchTerm,
};
pub use quiz::{
    scope::QuizScope,
    selector::{PoolPicker, QuizRound},
};
