//! List Questions use case.
//!
//! Serves the browse view: one page of questions plus everything the
//! frontend needs to draw the category sidebar.

use super::filter_questions::QuestionFilter;
use crate::config::BrowseConfig;
use crate::error::TriviaError;
use crate::ports::category_store::CategoryStore;
use std::sync::Arc;
use tracing::debug;
use trivia_domain::{Category, PageRequest, Question, paginate};

/// Input for the [`ListQuestionsUseCase`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuestionsInput {
    /// 1-based page number
    pub page: usize,
}

impl Default for ListQuestionsInput {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// One page of the question listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Count across all pages
    pub total_questions: usize,
    pub categories: Vec<Category>,
    /// Always `None` for the unfiltered listing
    pub current_category: Option<Category>,
}

/// Use case for the paged question listing
#[derive(Clone)]
pub struct ListQuestionsUseCase {
    filter: QuestionFilter,
    categories: Arc<dyn CategoryStore>,
    config: BrowseConfig,
}

impl ListQuestionsUseCase {
    pub fn new(
        filter: QuestionFilter,
        categories: Arc<dyn CategoryStore>,
        config: BrowseConfig,
    ) -> Self {
        Self {
            filter,
            categories,
            config,
        }
    }

    /// Returns `NotFound` when the requested page is empty, including when
    /// there are no questions at all.
    pub async fn execute(&self, input: ListQuestionsInput) -> Result<QuestionPage, TriviaError> {
        let all = self.filter.list_all().await?;
        let request = PageRequest::new(input.page, self.config.questions_per_page);
        let page = paginate(&all, request);

        debug!(
            "Page {} of size {}: {} of {} questions",
            request.page(),
            request.page_size(),
            page.len(),
            all.len()
        );

        if page.is_empty() {
            return Err(TriviaError::not_found(format!(
                "page {} is empty",
                input.page
            )));
        }

        let categories = self.categories.list_all().await?;

        Ok(QuestionPage {
            questions: page.to_vec(),
            total_questions: all.len(),
            categories,
            current_category: None,
        })
    }
}
