//! Application layer for trivia-api
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod error;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::BrowseConfig;
pub use error::{ErrorKind, TriviaError};
pub use ports::{
    category_store::CategoryStore, question_store::QuestionStore, store_error::StoreError,
};
pub use use_cases::create_question::{CreateQuestionInput, CreateQuestionUseCase};
pub use use_cases::delete_question::DeleteQuestionUseCase;
pub use use_cases::filter_questions::{CategoryQuestions, QuestionFilter, SearchResult};
pub use use_cases::list_categories::ListCategoriesUseCase;
pub use use_cases::list_questions::{ListQuestionsInput, ListQuestionsUseCase, QuestionPage};
pub use use_cases::play_quiz::{PlayQuizInput, PlayQuizUseCase};
