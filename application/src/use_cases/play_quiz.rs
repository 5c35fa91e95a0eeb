//! Play Quiz use case.
//!
//! Serves one question per call. The client carries the session: it sends
//! the scope it chose and every question id it has already been shown.

use crate::error::TriviaError;
use crate::ports::question_store::QuestionStore;
use std::sync::Arc;
use tracing::{debug, warn};
use trivia_domain::{PoolPicker, Question, QuestionId, QuizRound, QuizScope};

/// Input for the [`PlayQuizUseCase`]
///
/// `None` means the field was absent from the request, which is distinct
/// from an empty `previous_questions` list at the start of a quiz.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayQuizInput {
    pub scope: Option<QuizScope>,
    pub previous_questions: Option<Vec<QuestionId>>,
}

impl PlayQuizInput {
    pub fn new(scope: QuizScope, previous_questions: Vec<QuestionId>) -> Self {
        Self {
            scope: Some(scope),
            previous_questions: Some(previous_questions),
        }
    }
}

/// Use case for drawing the next quiz question
#[derive(Clone)]
pub struct PlayQuizUseCase {
    questions: Arc<dyn QuestionStore>,
    picker: Arc<dyn PoolPicker>,
}

impl PlayQuizUseCase {
    pub fn new(questions: Arc<dyn QuestionStore>, picker: Arc<dyn PoolPicker>) -> Self {
        Self { questions, picker }
    }

    /// Returns the next question, or `None` once the scope is exhausted.
    ///
    /// A missing input or a storage failure is `UnprocessableEntity`.
    /// An unknown category scope is not checked; it simply has no questions.
    pub async fn execute(&self, input: PlayQuizInput) -> Result<Option<Question>, TriviaError> {
        let scope = input
            .scope
            .ok_or_else(|| TriviaError::unprocessable("quiz_category is required"))?;
        let previous = input
            .previous_questions
            .ok_or_else(|| TriviaError::unprocessable("previous_questions is required"))?;

        let round = QuizRound::new(scope, previous);

        let candidates = self
            .questions
            .filter_excluding_ids(&round.asked, scope.category())
            .await
            .map_err(|e| {
                warn!("Loading quiz candidates failed: {}", e);
                TriviaError::unprocessable(e.to_string())
            })?;

        debug!(
            "Quiz {:?}: {} asked, {} candidates",
            scope,
            round.asked.len(),
            candidates.len()
        );

        Ok(round.select(candidates, self.picker.as_ref()))
    }
}
