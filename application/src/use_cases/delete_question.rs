//! Delete Question use case.

use crate::error::TriviaError;
use crate::ports::question_store::QuestionStore;
use std::sync::Arc;
use tracing::info;
use trivia_domain::QuestionId;

/// Use case for removing a question by id
#[derive(Clone)]
pub struct DeleteQuestionUseCase {
    questions: Arc<dyn QuestionStore>,
}

impl DeleteQuestionUseCase {
    pub fn new(questions: Arc<dyn QuestionStore>) -> Self {
        Self { questions }
    }

    /// Returns `NotFound` if no question has this id.
    pub async fn execute(&self, id: QuestionId) -> Result<QuestionId, TriviaError> {
        if !self.questions.delete_by_id(id).await? {
            return Err(TriviaError::not_found(format!("question {} does not exist", id)));
        }

        info!("Deleted question {}", id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::test_support::{MockQuestionStore, question};

    #[tokio::test]
    async fn test_delete_existing() {
        let store = Arc::new(MockQuestionStore::new(vec![
            question(4, "Q4", 1),
            question(5, "Q5", 1),
        ]));
        let use_case = DeleteQuestionUseCase::new(store.clone());

        let deleted = use_case.execute(QuestionId::new(5)).await.unwrap();

        assert_eq!(deleted, QuestionId::new(5));
        assert_eq!(store.ids(), vec![4]);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let use_case = DeleteQuestionUseCase::new(Arc::new(MockQuestionStore::new(vec![
            question(4, "Q4", 1),
        ])));
        let err = use_case.execute(QuestionId::new(5)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.code(), 404);
    }
}
