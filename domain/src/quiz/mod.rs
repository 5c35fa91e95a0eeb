//! Quiz domain.
//!
//! A quiz is a client-held sequence of questions. The server is stateless:
//! every request names the scope and every question already asked, and gets
//! back one fresh question or nothing.
//!
//! - [`scope::QuizScope`]: all categories or a single one
//! - [`selector::QuizRound`]: the eligibility rules for one request
//! - [`selector::PoolPicker`]: strategy for choosing uniformly from a pool

pub mod scope;
pub mod selector;
