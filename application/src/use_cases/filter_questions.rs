//! Question filtering.
//!
//! [`QuestionFilter`] answers the three read-only query shapes over the
//! question store: everything, a substring search, and a single category.
//! All results are in ascending id order.

use crate::error::TriviaError;
use crate::ports::category_store::CategoryStore;
use crate::ports::question_store::QuestionStore;
use std::sync::Arc;
use tracing::{debug, warn};
use trivia_domain::{Category, CategoryId, Question, SearchTerm};

/// Questions matching a search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Questions belonging to one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Category,
}

/// Read-only question queries
#[derive(Clone)]
pub struct QuestionFilter {
    questions: Arc<dyn QuestionStore>,
    categories: Arc<dyn CategoryStore>,
}

impl QuestionFilter {
    pub fn new(questions: Arc<dyn QuestionStore>, categories: Arc<dyn CategoryStore>) -> Self {
        Self {
            questions,
            categories,
        }
    }

    /// Every question. Storage failures surface as `Internal`.
    pub async fn list_all(&self) -> Result<Vec<Question>, TriviaError> {
        Ok(self.questions.list_all().await?)
    }

    /// Case-insensitive substring search over question text.
    ///
    /// A missing or empty term is rejected before the store is touched.
    /// No matches, or a store failure, is `NotFound`.
    pub async fn search(&self, term: Option<&str>) -> Result<SearchResult, TriviaError> {
        let term = term.ok_or_else(|| TriviaError::unprocessable("searchTerm is required"))?;
        let term = SearchTerm::try_new(term)?;

        let questions = self
            .questions
            .filter_by_substring(&term)
            .await
            .map_err(|e| {
                warn!("Search for {:?} failed: {}", term.as_str(), e);
                TriviaError::not_found(e.to_string())
            })?;

        debug!("Search {:?} matched {} questions", term.as_str(), questions.len());

        if questions.is_empty() {
            return Err(TriviaError::not_found(format!(
                "no questions match {:?}",
                term.as_str()
            )));
        }

        Ok(SearchResult {
            total_questions: questions.len(),
            questions,
        })
    }

    /// Questions in one category.
    ///
    /// An unknown category is `UnprocessableEntity`; a failure while
    /// fetching its questions is `NotFound`. An existing category with no
    /// questions is a normal, empty result.
    pub async fn by_category(&self, id: CategoryId) -> Result<CategoryQuestions, TriviaError> {
        let category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| TriviaError::unprocessable(format!("unknown category {}", id)))?;

        let questions = self.questions.filter_by_category(id).await.map_err(|e| {
            warn!("Listing questions for category {} failed: {}", id, e);
            TriviaError::not_found(e.to_string())
        })?;

        debug!(
            "Category {} ({}) has {} questions",
            id,
            category.kind,
            questions.len()
        );

        Ok(CategoryQuestions {
            total_questions: questions.len(),
            questions,
            current_category: category,
        })
    }
}
