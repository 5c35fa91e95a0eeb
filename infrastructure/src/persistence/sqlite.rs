//! SQLite-backed question and category stores.

use super::schema::{configure_connection, initialize_schema, seed_default_categories};
use async_trait::async_trait;
use rusqlite::{Connection, ErrorCode, OptionalExtension, params};
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use trivia_application::{CategoryStore, QuestionStore, StoreError};
use trivia_domain::{Category, CategoryId, NewQuestion, Question, QuestionId, SearchTerm};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Shared handle to one SQLite database.
///
/// Both stores borrow the same connection; access is serialized by the
/// mutex.
#[derive(Clone)]
pub struct SqliteDatabase {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteDatabase {
    /// Open or create a database at the given path and ensure the schema
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(backend)?;
        info!("Opened SQLite database at {}", path.display());
        Self::from_connection(conn)
    }

    /// Create an in-memory database (for testing)
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(backend)?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        configure_connection(&conn).map_err(backend)?;
        initialize_schema(&conn).map_err(backend)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Insert the standard categories into an empty category table
    pub fn seed_categories(&self) -> Result<usize, StoreError> {
        let inserted = self.with_conn(seed_default_categories)?;
        if inserted > 0 {
            info!("Seeded {} default categories", inserted);
        }
        Ok(inserted)
    }

    pub fn question_store(&self) -> SqliteQuestionStore {
        SqliteQuestionStore { db: self.clone() }
    }

    pub fn category_store(&self) -> SqliteCategoryStore {
        SqliteCategoryStore { db: self.clone() }
    }

    fn with_conn<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::Backend(format!("Failed to lock connection: {}", e)))?;
        f(&conn).map_err(classify)
    }
}

fn backend(e: rusqlite::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

/// Constraint failures are the caller's fault; everything else is ours
fn classify(e: rusqlite::Error) -> StoreError {
    match e.sqlite_error_code() {
        Some(ErrorCode::ConstraintViolation) => StoreError::Constraint(e.to_string()),
        _ => StoreError::Backend(e.to_string()),
    }
}

fn row_to_question(row: &rusqlite::Row) -> rusqlite::Result<Question> {
    Ok(Question {
        id: QuestionId::new(row.get(0)?),
        question: row.get(1)?,
        answer: row.get(2)?,
        category: CategoryId::new(row.get(3)?),
        difficulty: row.get(4)?,
    })
}

fn query_questions(
    conn: &Connection,
    sql: &str,
    params: &[&dyn rusqlite::ToSql],
) -> rusqlite::Result<Vec<Question>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, row_to_question)?;
    rows.collect()
}

/// [`QuestionStore`] over the `questions` table
#[derive(Clone)]
pub struct SqliteQuestionStore {
    db: SqliteDatabase,
}

#[async_trait]
impl QuestionStore for SqliteQuestionStore {
    async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        self.db.with_conn(|conn| {
            let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id");
            query_questions(conn, &sql, params![])
        })
    }

    async fn filter_by_substring(&self, term: &SearchTerm) -> Result<Vec<Question>, StoreError> {
        // SQLite's lower() and LIKE only fold ASCII, so matching happens here
        let all = self.list_all().await?;
        let matched: Vec<Question> = all
            .into_iter()
            .filter(|q| term.matches(&q.question))
            .collect();
        debug!("Substring {:?} matched {} rows", term.as_str(), matched.len());
        Ok(matched)
    }

    async fn filter_by_category(&self, category: CategoryId) -> Result<Vec<Question>, StoreError> {
        self.db.with_conn(|conn| {
            let sql =
                format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ?1 ORDER BY id");
            query_questions(conn, &sql, params![category.value()])
        })
    }

    async fn filter_excluding_ids(
        &self,
        excluded: &HashSet<QuestionId>,
        category: Option<CategoryId>,
    ) -> Result<Vec<Question>, StoreError> {
        // Excluded ids are filtered here; SQLite caps the number of bound parameters
        let candidates = match category {
            Some(category) => self.filter_by_category(category).await?,
            None => self.list_all().await?,
        };
        Ok(candidates
            .into_iter()
            .filter(|q| !excluded.contains(&q.id))
            .collect())
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question, StoreError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO questions (question, answer, difficulty, category)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    question.question,
                    question.answer,
                    question.difficulty,
                    question.category.value()
                ],
            )?;
            let id = conn.last_insert_rowid();
            Ok(Question::from_new(id, question))
        })
    }

    async fn delete_by_id(&self, id: QuestionId) -> Result<bool, StoreError> {
        self.db.with_conn(|conn| {
            let rows = conn.execute("DELETE FROM questions WHERE id = ?1", params![id.value()])?;
            Ok(rows > 0)
        })
    }
}

/// [`CategoryStore`] over the `categories` table
#[derive(Clone)]
pub struct SqliteCategoryStore {
    db: SqliteDatabase,
}

#[async_trait]
impl CategoryStore for SqliteCategoryStore {
    async fn list_all(&self) -> Result<Vec<Category>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id, type FROM categories ORDER BY type, id")?;
            let rows = stmt.query_map([], |row| {
                Ok(Category::new(row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
            })?;
            rows.collect()
        })
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        self.db.with_conn(|conn| {
            conn.query_row(
                "SELECT id, type FROM categories WHERE id = ?1",
                params![id.value()],
                |row| Ok(Category::new(row.get::<_, i64>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()
        })
    }
}
