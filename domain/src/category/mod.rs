//! Category domain.
//!
//! Categories are read-only labels that questions point at by id.

pub mod entities;
