//! In-process doubles for the store ports, shared by use case tests.

use crate::ports::category_store::CategoryStore;
use crate::ports::question_store::QuestionStore;
use crate::ports::store_error::StoreError;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use trivia_domain::{
    Category, CategoryId, NewQuestion, PoolPicker, Question, QuestionId, SearchTerm,
};

pub fn question(id: i64, text: &str, category: i64) -> Question {
    Question::from_new(id, NewQuestion::new(text, format!("answer {id}"), 1, category))
}

/// Mock question store backed by a vector, with switchable failures
pub struct MockQuestionStore {
    questions: Mutex<Vec<Question>>,
    fail_reads: bool,
    reject_inserts: bool,
    pub calls: AtomicUsize,
}

impl MockQuestionStore {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: Mutex::new(questions),
            fail_reads: false,
            reject_inserts: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_reads: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn rejecting_inserts() -> Self {
        Self {
            reject_inserts: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn ids(&self) -> Vec<i64> {
        self.questions
            .lock()
            .unwrap()
            .iter()
            .map(|q| q.id.value())
            .collect()
    }

    fn read(&self, keep: impl Fn(&Question) -> bool) -> Result<Vec<Question>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(StoreError::Backend("mock read failure".to_string()));
        }
        let mut out: Vec<Question> = self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| keep(q))
            .cloned()
            .collect();
        out.sort_by_key(|q| q.id);
        Ok(out)
    }
}

#[async_trait]
impl QuestionStore for MockQuestionStore {
    async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        self.read(|_| true)
    }

    async fn filter_by_substring(&self, term: &SearchTerm) -> Result<Vec<Question>, StoreError> {
        self.read(|q| term.matches(&q.question))
    }

    async fn filter_by_category(&self, category: CategoryId) -> Result<Vec<Question>, StoreError> {
        self.read(|q| q.category == category)
    }

    async fn filter_excluding_ids(
        &self,
        excluded: &HashSet<QuestionId>,
        category: Option<CategoryId>,
    ) -> Result<Vec<Question>, StoreError> {
        self.read(|q| !excluded.contains(&q.id) && category.is_none_or(|c| q.category == c))
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.reject_inserts {
            return Err(StoreError::Constraint("FOREIGN KEY constraint failed".to_string()));
        }
        let mut questions = self.questions.lock().unwrap();
        let next = questions.iter().map(|q| q.id.value()).max().unwrap_or(0) + 1;
        let stored = Question::from_new(next, question);
        questions.push(stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: QuestionId) -> Result<bool, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| q.id != id);
        Ok(questions.len() != before)
    }
}

/// Mock category store
pub struct MockCategoryStore {
    categories: Vec<Category>,
    fail: bool,
}

impl MockCategoryStore {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            categories: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl CategoryStore for MockCategoryStore {
    async fn list_all(&self) -> Result<Vec<Category>, StoreError> {
        if self.fail {
            return Err(StoreError::Backend("mock read failure".to_string()));
        }
        let mut out = self.categories.clone();
        out.sort_by(|a, b| a.kind.cmp(&b.kind));
        Ok(out)
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        if self.fail {
            return Err(StoreError::Backend("mock read failure".to_string()));
        }
        Ok(self.categories.iter().find(|c| c.id == id).cloned())
    }
}

/// Picker that always chooses the same index
pub struct FixedPicker(pub usize);

impl PoolPicker for FixedPicker {
    fn pick_index(&self, _len: usize) -> usize {
        self.0
    }
}
