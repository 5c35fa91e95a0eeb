//! Client-facing error kinds produced by the use cases

use crate::ports::store_error::StoreError;
use thiserror::Error;
use trivia_domain::DomainError;

/// Classification of a failed operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    UnprocessableEntity,
    Internal,
}

impl ErrorKind {
    /// Numeric code reported to the client
    pub fn code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::Internal => 500,
        }
    }

    /// Fixed message reported to the client
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad request error",
            ErrorKind::NotFound => "Resource not found",
            ErrorKind::UnprocessableEntity => "Unprocessable entity",
            ErrorKind::Internal => "An error has occured, please try again",
        }
    }
}

/// Errors returned by the trivia use cases
///
/// The payload is a diagnostic for logs; clients only ever see
/// [`ErrorKind::message`].
#[derive(Error, Debug)]
pub enum TriviaError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TriviaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TriviaError::BadRequest(_) => ErrorKind::BadRequest,
            TriviaError::NotFound(_) => ErrorKind::NotFound,
            TriviaError::UnprocessableEntity(_) => ErrorKind::UnprocessableEntity,
            TriviaError::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn code(&self) -> u16 {
        self.kind().code()
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        TriviaError::NotFound(detail.into())
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        TriviaError::UnprocessableEntity(detail.into())
    }
}

impl From<DomainError> for TriviaError {
    fn from(err: DomainError) -> Self {
        TriviaError::UnprocessableEntity(err.to_string())
    }
}

impl From<StoreError> for TriviaError {
    fn from(err: StoreError) -> Self {
        TriviaError::Internal(err.to_string())
    }
}
