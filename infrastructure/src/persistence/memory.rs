//! Process-local stores.
//!
//! Behave like the SQLite adapters, including the foreign key check on
//! insert, but keep everything in memory. Used for `backend = "memory"`
//! and in tests.

use super::schema::DEFAULT_CATEGORIES;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, RwLock};
use trivia_application::{CategoryStore, QuestionStore, StoreError};
use trivia_domain::{Category, CategoryId, NewQuestion, Question, QuestionId, SearchTerm};

fn poisoned<E: std::fmt::Display>(e: E) -> StoreError {
    StoreError::Backend(format!("Store lock poisoned: {}", e))
}

/// In-memory [`CategoryStore`]
#[derive(Debug, Default)]
pub struct InMemoryCategoryStore {
    categories: RwLock<BTreeMap<CategoryId, Category>>,
}

impl InMemoryCategoryStore {
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            categories: RwLock::new(categories.into_iter().map(|c| (c.id, c)).collect()),
        }
    }

    /// The six standard categories
    pub fn with_defaults() -> Self {
        Self::new(
            DEFAULT_CATEGORIES
                .iter()
                .map(|(id, kind)| Category::new(*id, *kind)),
        )
    }

    fn contains(&self, id: CategoryId) -> Result<bool, StoreError> {
        Ok(self.categories.read().map_err(poisoned)?.contains_key(&id))
    }
}

#[async_trait]
impl CategoryStore for InMemoryCategoryStore {
    async fn list_all(&self) -> Result<Vec<Category>, StoreError> {
        let mut out: Vec<Category> = self
            .categories
            .read()
            .map_err(poisoned)?
            .values()
            .cloned()
            .collect();
        out.sort_by(|a, b| a.kind.cmp(&b.kind).then(a.id.cmp(&b.id)));
        Ok(out)
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        Ok(self.categories.read().map_err(poisoned)?.get(&id).cloned())
    }
}

#[derive(Debug, Default)]
struct QuestionTable {
    rows: BTreeMap<QuestionId, Question>,
    last_id: i64,
}

/// In-memory [`QuestionStore`]
///
/// Ids are never reused, matching SQLite's `AUTOINCREMENT`.
#[derive(Debug)]
pub struct InMemoryQuestionStore {
    table: RwLock<QuestionTable>,
    categories: Arc<InMemoryCategoryStore>,
}

impl InMemoryQuestionStore {
    /// Questions may only reference categories in `categories`
    pub fn new(categories: Arc<InMemoryCategoryStore>) -> Self {
        Self {
            table: RwLock::new(QuestionTable::default()),
            categories,
        }
    }

    fn scan(&self, keep: impl Fn(&Question) -> bool) -> Result<Vec<Question>, StoreError> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.rows.values().filter(|q| keep(q)).cloned().collect())
    }
}

#[async_trait]
impl QuestionStore for InMemoryQuestionStore {
    async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        self.scan(|_| true)
    }

    async fn filter_by_substring(&self, term: &SearchTerm) -> Result<Vec<Question>, StoreError> {
        self.scan(|q| term.matches(&q.question))
    }

    async fn filter_by_category(&self, category: CategoryId) -> Result<Vec<Question>, StoreError> {
        self.scan(|q| q.category == category)
    }

    async fn filter_excluding_ids(
        &self,
        excluded: &HashSet<QuestionId>,
        category: Option<CategoryId>,
    ) -> Result<Vec<Question>, StoreError> {
        self.scan(|q| !excluded.contains(&q.id) && category.is_none_or(|c| q.category == c))
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question, StoreError> {
        if !self.categories.contains(question.category)? {
            return Err(StoreError::Constraint(format!(
                "category {} does not exist",
                question.category
            )));
        }

        let mut table = self.table.write().map_err(poisoned)?;
        table.last_id += 1;
        let stored = Question::from_new(table.last_id, question);
        table.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: QuestionId) -> Result<bool, StoreError> {
        let mut table = self.table.write().map_err(poisoned)?;
        Ok(table.rows.remove(&id).is_some())
    }
}
