//! Quiz endpoint
//!
//! - `POST /quizzes` - next random question not yet asked

use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    response::Json,
    routing::post,
};

use super::requests::QuizRequest;
use super::responses::QuizResponse;
use super::{AppState, HttpError};

/// Any unreadable body is `422` here, matching the other quiz input errors.
async fn play_quiz(
    State(state): State<AppState>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, HttpError> {
    let Json(request) = body.map_err(|e| {
        tracing::debug!("Rejected quiz body: {}", e);
        HttpError::unprocessable()
    })?;

    let question = state.play_quiz.execute(request.into_input()?).await?;
    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
