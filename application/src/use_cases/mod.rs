//! Use cases
//!
//! Application-level operations that orchestrate domain logic, one per
//! API operation.

pub mod create_question;
pub mod delete_question;
pub mod filter_questions;
pub mod list_categories;
pub mod list_questions;
pub mod play_quiz;
