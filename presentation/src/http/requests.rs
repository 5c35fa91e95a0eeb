//! Request bodies and query strings, and their conversion to use case input.
//!
//! The frontend is loosely typed: ids and numbers arrive as JSON numbers
//! or as strings holding numbers, and absent fields are sometimes sent as
//! `null`. Everything is accepted as raw JSON here and coerced explicitly
//! so that bad values become `422`, not a framework rejection.

use serde::Deserialize;
use serde_json::Value;
use trivia_application::{CreateQuestionInput, PlayQuizInput, TriviaError};
use trivia_domain::{QuestionId, QuizScope};

/// `?page=` on the question listing
#[derive(Debug, Default)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    /// The first `page` parameter wins; repeats and unrelated keys are ignored
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            page: pairs
                .into_iter()
                .find(|(key, _)| key == "page")
                .map(|(_, value)| value),
        }
    }

    /// 1 when absent or not an integer; 0 (an empty page) when below 1
    pub fn page(&self) -> usize {
        match self.page.as_deref().map(str::trim).map(str::parse::<i64>) {
            Some(Ok(page)) if page >= 1 => usize::try_from(page).unwrap_or(usize::MAX),
            Some(Ok(_)) => 0,
            _ => 1,
        }
    }
}

/// `POST /questions`
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<Value>,
    pub answer: Option<Value>,
    pub difficulty: Option<Value>,
    pub category: Option<Value>,
}

impl CreateQuestionRequest {
    pub fn into_input(self) -> Result<CreateQuestionInput, TriviaError> {
        Ok(CreateQuestionInput {
            question: text_field("question", self.question)?,
            answer: text_field("answer", self.answer)?,
            difficulty: integer_field("difficulty", self.difficulty)?,
            category: integer_field("category", self.category)?,
        })
    }
}

/// `POST /questions/search`
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// The `quiz_category` object sent by the play view
#[derive(Debug, Default, Deserialize)]
pub struct QuizCategory {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
}

impl QuizCategory {
    /// An empty `type` selects every category and ignores `id`. Any other
    /// `type` needs an `id`; `0` is the only id meaning every category.
    pub fn to_scope(&self) -> Result<QuizScope, TriviaError> {
        let kind = self
            .kind
            .as_deref()
            .ok_or_else(|| TriviaError::unprocessable("quiz_category.type is required"))?;
        if kind.is_empty() {
            return Ok(QuizScope::All);
        }

        let id = integer_field("quiz_category.id", self.id.clone())?
            .ok_or_else(|| TriviaError::unprocessable("quiz_category.id is required"))?;
        Ok(QuizScope::from_wire(kind, id))
    }
}

/// `POST /quizzes`
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: Option<QuizCategory>,
    pub previous_questions: Option<Vec<Value>>,
}

impl QuizRequest {
    pub fn into_input(self) -> Result<PlayQuizInput, TriviaError> {
        let scope = self.quiz_category.map(|c| c.to_scope()).transpose()?;
        let previous_questions = self
            .previous_questions
            .map(|ids| {
                ids.into_iter()
                    .map(|id| {
                        integer_field("previous_questions", Some(id))?
                            .map(QuestionId::new)
                            .ok_or_else(|| TriviaError::unprocessable("null question id"))
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(PlayQuizInput {
            scope,
            previous_questions,
        })
    }
}

fn text_field(name: &str, value: Option<Value>) -> Result<Option<String>, TriviaError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(TriviaError::unprocessable(format!(
            "{name} must be a string, got {other}"
        ))),
    }
}

/// Integers, integral floats, and strings holding an integer
fn integer_field(name: &str, value: Option<Value>) -> Result<Option<i64>, TriviaError> {
    let invalid = |v: &Value| {
        TriviaError::unprocessable(format!("{name} must be an integer, got {v}"))
    };

    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                return Ok(Some(i));
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(Some(f as i64)),
                _ => Err(invalid(&Value::Number(n))),
            }
        }
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| invalid(&Value::String(s))),
        Some(other) => Err(invalid(&other)),
    }
}
