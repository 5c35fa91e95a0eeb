//! Persistence adapters for the question and category store ports.
//!
//! - [`sqlite`]: durable storage in a SQLite file
//! - [`memory`]: process-local storage with the same semantics
//! - [`schema`]: table definitions and the default category set

pub mod memory;
pub mod schema;
pub mod sqlite;

pub use memory::{InMemoryCategoryStore, InMemoryQuestionStore};
pub use schema::DEFAULT_CATEGORIES;
pub use sqlite::{SqliteCategoryStore, SqliteDatabase, SqliteQuestionStore};
