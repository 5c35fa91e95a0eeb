//! Question store port
//!
//! Defines the queries the core needs from question persistence.
//! Adapters live in the infrastructure layer.

use super::store_error::StoreError;
use async_trait::async_trait;
use std::collections::HashSet;
use trivia_domain::{CategoryId, NewQuestion, Question, QuestionId, SearchTerm};

/// Durable collection of questions
///
/// Every query returns questions in ascending id order so that page
/// boundaries are stable between calls.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Every question
    async fn list_all(&self) -> Result<Vec<Question>, StoreError>;

    /// Questions whose text contains `term`, ignoring case
    async fn filter_by_substring(&self, term: &SearchTerm) -> Result<Vec<Question>, StoreError>;

    /// Questions belonging to `category`
    async fn filter_by_category(&self, category: CategoryId) -> Result<Vec<Question>, StoreError>;

    /// Questions whose id is not in `excluded`, optionally restricted to
    /// one category
    async fn filter_excluding_ids(
        &self,
        excluded: &HashSet<QuestionId>,
        category: Option<CategoryId>,
    ) -> Result<Vec<Question>, StoreError>;

    /// Persist a new question and return it with its assigned id
    async fn insert(&self, question: NewQuestion) -> Result<Question, StoreError>;

    /// Delete by id. Returns `false` if there was no such question.
    async fn delete_by_id(&self, id: QuestionId) -> Result<bool, StoreError>;
}
