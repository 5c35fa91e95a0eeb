//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod category_store;
pub mod question_store;
pub mod store_error;
