//! Response bodies

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use trivia_application::{CategoryQuestions, QuestionPage, SearchResult};
use trivia_domain::{Category, Question};

/// Categories rendered as a `{"<id>": "<type>"}` object
///
/// Entries are written in the order the store returned them.
#[derive(Debug, Clone, Default)]
pub struct CategoryMap(pub Vec<Category>);

impl Serialize for CategoryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in &self.0 {
            map.serialize_entry(&category.id.value().to_string(), &category.kind)?;
        }
        map.end()
    }
}

/// `GET /categories`
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

impl CategoriesResponse {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            success: true,
            categories: CategoryMap(categories),
        }
    }
}

/// `GET /questions`
#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<String>,
}

impl From<QuestionPage> for QuestionPageResponse {
    fn from(page: QuestionPage) -> Self {
        Self {
            success: true,
            questions: page.questions,
            total_questions: page.total_questions,
            categories: CategoryMap(page.categories),
            current_category: page.current_category.map(|c| c.kind),
        }
    }
}

/// `POST /questions/search`
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

impl From<SearchResult> for SearchResponse {
    fn from(result: SearchResult) -> Self {
        Self {
            success: true,
            questions: result.questions,
            total_questions: result.total_questions,
        }
    }
}

/// `GET /categories/:id/questions`
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

impl From<CategoryQuestions> for CategoryQuestionsResponse {
    fn from(result: CategoryQuestions) -> Self {
        Self {
            success: true,
            questions: result.questions,
            total_questions: result.total_questions,
            current_category: result.current_category.kind,
        }
    }
}

/// Acknowledgement for mutations
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

/// `POST /quizzes`; `question` is `null` once the pool is exhausted
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}
