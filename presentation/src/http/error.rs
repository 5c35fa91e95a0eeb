//! HTTP error handling
//!
//! Every failure leaves the server in the same shape:
//! `{"success": false, "error": <code>, "message": <text>}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use trivia_application::{ErrorKind, TriviaError};

/// Error body returned by every endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpError {
    pub success: bool,
    /// HTTP status code, repeated in the body
    pub error: u16,
    /// User-facing error message
    pub message: String,
}

impl HttpError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: code,
            message: message.into(),
        }
    }

    pub fn from_kind(kind: ErrorKind) -> Self {
        Self::new(kind.code(), kind.message())
    }

    pub fn bad_request() -> Self {
        Self::from_kind(ErrorKind::BadRequest)
    }

    pub fn not_found() -> Self {
        Self::from_kind(ErrorKind::NotFound)
    }

    pub fn unprocessable() -> Self {
        Self::from_kind(ErrorKind::UnprocessableEntity)
    }

    pub fn method_not_allowed() -> Self {
        Self::new(405, "Method not allowed")
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.error).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl From<TriviaError> for HttpError {
    fn from(err: TriviaError) -> Self {
        match err.kind() {
            ErrorKind::Internal => tracing::error!("{}", err),
            _ => tracing::debug!("{}", err),
        }
        HttpError::from_kind(err.kind())
    }
}
