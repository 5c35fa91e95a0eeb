//! Presentation layer for trivia-api
//!
//! This crate contains the CLI definition and the JSON HTTP API.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{AppState, HttpError, cors_layer, create_router, serve};
