//! Question entities

use crate::category::entities::CategoryId;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a [`Question`], assigned by the store on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(i64);

impl QuestionId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for QuestionId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A stored trivia question (Entity)
///
/// Questions are created and deleted, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i64,
}

impl Question {
    /// Attach a store-assigned id to validated input
    pub fn from_new(id: impl Into<QuestionId>, new: NewQuestion) -> Self {
        Self {
            id: id.into(),
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        }
    }
}

/// Validated input for creating a [`Question`]
///
/// All four content fields are required. Whether `category` refers to an
/// existing category is left to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: CategoryId,
}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        difficulty: i64,
        category: impl Into<CategoryId>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            difficulty,
            category: category.into(),
        }
    }

    /// Build from optional fields, failing on the first absent one
    pub fn from_fields(
        question: Option<String>,
        answer: Option<String>,
        difficulty: Option<i64>,
        category: Option<i64>,
    ) -> Result<Self, DomainError> {
        let question = question.ok_or(DomainError::MissingField("question"))?;
        let answer = answer.ok_or(DomainError::MissingField("answer"))?;
        let difficulty = difficulty.ok_or(DomainError::MissingField("difficulty"))?;
        let category = category.ok_or(DomainError::MissingField("category"))?;

        Ok(Self::new(question, answer, difficulty, category))
    }
}
