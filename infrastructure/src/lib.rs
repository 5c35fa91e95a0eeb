//! Infrastructure layer for trivia-api
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod persistence;
pub mod random;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileDatabaseConfig, FileLoggingConfig,
    FilePaginationConfig, FileQuizConfig, FileServerConfig, StorageBackend,
};
pub use persistence::{
    DEFAULT_CATEGORIES, InMemoryCategoryStore, InMemoryQuestionStore, SqliteCategoryStore,
    SqliteDatabase, SqliteQuestionStore,
};
pub use random::{SeededPicker, UniformPicker, picker_for_seed};
