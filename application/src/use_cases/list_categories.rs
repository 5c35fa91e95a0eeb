//! List Categories use case.

use crate::error::TriviaError;
use crate::ports::category_store::CategoryStore;
use std::sync::Arc;
use tracing::debug;
use trivia_domain::Category;

/// Lists every category, ordered by label
#[derive(Clone)]
pub struct ListCategoriesUseCase {
    categories: Arc<dyn CategoryStore>,
}

impl ListCategoriesUseCase {
    pub fn new(categories: Arc<dyn CategoryStore>) -> Self {
        Self { categories }
    }

    /// Returns `NotFound` when there are no categories at all.
    pub async fn execute(&self) -> Result<Vec<Category>, TriviaError> {
        let categories = self.categories.list_all().await?;
        debug!("Loaded {} categories", categories.len());

        if categories.is_empty() {
            return Err(TriviaError::not_found("no categories defined"));
        }

        Ok(categories)
    }
}
