//! Random-without-repetition question selection

use super::scope::QuizScope;
use crate::question::entities::{Question, QuestionId};
use std::collections::HashSet;

/// Strategy for choosing one element from a non-empty pool
///
/// Production code picks uniformly at random; tests substitute a
/// deterministic implementation.
pub trait PoolPicker: Send + Sync {
    /// Return an index in `0..len`. Never called with `len == 0`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Eligibility rules for a single quiz request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizRound {
    pub scope: QuizScope,
    pub asked: HashSet<QuestionId>,
}

impl QuizRound {
    pub fn new(scope: QuizScope, asked: impl IntoIterator<Item = QuestionId>) -> Self {
        Self {
            scope,
            asked: asked.into_iter().collect(),
        }
    }

    pub fn is_eligible(&self, question: &Question) -> bool {
        self.scope.includes(question) && !self.asked.contains(&question.id)
    }

    /// Pick the next question from `candidates`.
    ///
    /// Candidates that are out of scope or already asked are dropped first,
    /// so the result is never a repeat even if the store over-returns.
    /// An empty pool yields `None`: the quiz is over.
    pub fn select(&self, candidates: Vec<Question>, picker: &dyn PoolPicker) -> Option<Question> {
        let mut pool: Vec<Question> = candidates
            .into_iter()
            .filter(|q| self.is_eligible(q))
            .collect();

        if pool.is_empty() {
            return None;
        }

        let index = picker.pick_index(pool.len()) % pool.len();
        Some(pool.swap_remove(index))
    }
}
