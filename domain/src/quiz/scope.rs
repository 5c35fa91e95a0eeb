//! Quiz scope

use crate::category::entities::CategoryId;
use crate::question::entities::Question;
use serde::{Deserialize, Serialize};

/// Category restriction for quiz selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuizScope {
    /// Every category
    #[default]
    All,
    /// A single category
    Category(CategoryId),
}

impl QuizScope {
    /// Interpret the `{type, id}` pair the frontend sends.
    ///
    /// An empty `type` or an id of `0` selects every category.
    pub fn from_wire(kind: &str, id: i64) -> Self {
        if kind.is_empty() || id == 0 {
            QuizScope::All
        } else {
            QuizScope::Category(CategoryId::new(id))
        }
    }

    pub fn category(&self) -> Option<CategoryId> {
        match self {
            QuizScope::All => None,
            QuizScope::Category(id) => Some(*id),
        }
    }

    pub fn includes(&self, question: &Question) -> bool {
        match self {
            QuizScope::All => true,
            QuizScope::Category(id) => question.category == *id,
        }
    }
}
