//! SQLite schema bootstrap and seed data.

use rusqlite::{Connection, params};

/// Categories every trivia deployment starts with, keyed by id
pub const DEFAULT_CATEGORIES: [(i64, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id   INTEGER PRIMARY KEY,
    type TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS questions (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    question   TEXT NOT NULL,
    answer     TEXT NOT NULL,
    difficulty INTEGER NOT NULL,
    category   INTEGER NOT NULL REFERENCES categories(id)
);

CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category);
"#;

/// Per-connection settings. Foreign keys are off by default in SQLite.
pub fn configure_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
}

/// Create tables and indexes if they do not exist yet
pub fn initialize_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)
}

/// Insert [`DEFAULT_CATEGORIES`] if the category table is empty.
///
/// Returns the number of rows inserted.
pub fn seed_default_categories(conn: &Connection) -> rusqlite::Result<usize> {
    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
    if existing > 0 {
        return Ok(0);
    }

    let mut stmt = conn.prepare("INSERT INTO categories (id, type) VALUES (?1, ?2)")?;
    for (id, kind) in DEFAULT_CATEGORIES {
        stmt.execute(params![id, kind])?;
    }
    Ok(DEFAULT_CATEGORIES.len())
}
