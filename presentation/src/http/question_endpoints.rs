//! Question endpoints
//!
//! - `GET /questions?page=N` - paged listing
//! - `POST /questions` - create a question
//! - `DELETE /questions/:id` - delete a question
//! - `POST /questions/search` - case-insensitive substring search

use axum::{
    Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
};
use trivia_application::ListQuestionsInput;
use trivia_domain::QuestionId;

use super::requests::{CreateQuestionRequest, PageQuery, SearchRequest};
use super::responses::{MessageResponse, QuestionPageResponse, SearchResponse};
use super::{AppState, HttpError};

async fn list_questions(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<QuestionPageResponse>, HttpError> {
    let query = params
        .map(|Query(pairs)| PageQuery::from_pairs(pairs))
        .unwrap_or_default();
    let page = state
        .list_questions
        .execute(ListQuestionsInput { page: query.page() })
        .await?;
    Ok(Json(page.into()))
}

async fn create_question(
    State(state): State<AppState>,
    body: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), HttpError> {
    let Json(request) = body.map_err(|e| {
        tracing::debug!("Rejected create body: {}", e);
        HttpError::bad_request()
    })?;

    let question = state.create_question.execute(request.into_input()?).await?;
    tracing::debug!("Created question {}", question.id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Question successfully created!")),
    ))
}

async fn delete_question(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, HttpError> {
    let Path(id) = id.map_err(|_| HttpError::not_found())?;
    state.delete_question.execute(QuestionId::new(id)).await?;
    Ok(Json(MessageResponse::new("Question successfully deleted")))
}

async fn search_questions(
    State(state): State<AppState>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, HttpError> {
    let Json(request) = body.map_err(|e| {
        tracing::debug!("Rejected search body: {}", e);
        HttpError::bad_request()
    })?;

    let result = state.filter.search(request.search_term.as_deref()).await?;
    Ok(Json(result.into()))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/:id", delete(delete_question))
        .route("/questions/search", post(search_questions))
        .with_state(state)
}
