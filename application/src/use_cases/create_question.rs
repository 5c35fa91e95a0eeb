//! Create Question use case.

use crate::error::TriviaError;
use crate::ports::question_store::QuestionStore;
use std::sync::Arc;
use tracing::{info, warn};
use trivia_domain::{NewQuestion, Question};

/// Input for the [`CreateQuestionUseCase`]
///
/// Fields are optional so that "absent" reaches the use case and is
/// reported as a validation failure rather than a transport error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateQuestionInput {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i64>,
    pub category: Option<i64>,
}

/// Use case for adding a question
#[derive(Clone)]
pub struct CreateQuestionUseCase {
    questions: Arc<dyn QuestionStore>,
}

impl CreateQuestionUseCase {
    pub fn new(questions: Arc<dyn QuestionStore>) -> Self {
        Self { questions }
    }

    /// Validate and persist.
    ///
    /// Both a missing field and a store rejection are `UnprocessableEntity`.
    pub async fn execute(&self, input: CreateQuestionInput) -> Result<Question, TriviaError> {
        let new = NewQuestion::from_fields(
            input.question,
            input.answer,
            input.difficulty,
            input.category,
        )?;

        let created = self.questions.insert(new).await.map_err(|e| {
            warn!("Insert rejected: {}", e);
            TriviaError::unprocessable(e.to_string())
        })?;

        info!(
            "Created question {} in category {}",
            created.id, created.category
        );
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::test_support::MockQuestionStore;

    fn complete() -> CreateQuestionInput {
        CreateQuestionInput {
            question: Some("Who invented Peanut Butter?".to_string()),
            answer: Some("George Washington Carver".to_string()),
            difficulty: Some(2),
            category: Some(4),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let store = Arc::new(MockQuestionStore::new(Vec::new()));
        let use_case = CreateQuestionUseCase::new(store.clone());

        let created = use_case.execute(complete()).await.unwrap();

        assert_eq!(created.id.value(), 1);
        assert_eq!(created.answer, "George Washington Carver");
        assert_eq!(store.ids(), vec![1]);
    }

    #[tokio::test]
    async fn test_missing_answer_is_unprocessable() {
        let store = Arc::new(MockQuestionStore::new(Vec::new()));
        let use_case = CreateQuestionUseCase::new(store.clone());

        let err = use_case
            .execute(CreateQuestionInput {
                answer: None,
                ..complete()
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnprocessableEntity);
        assert_eq!(err.code(), 422);
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn test_store_rejection_is_unprocessable() {
        let use_case = CreateQuestionUseCase::new(Arc::new(MockQuestionStore::rejecting_inserts()));
        let err = use_case.execute(complete()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnprocessableEntity);
    }
}
