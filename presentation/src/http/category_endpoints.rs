//! Category endpoints
//!
//! - `GET /categories` - every category as an `{id: type}` map
//! - `GET /categories/:id/questions` - questions in one category

use axum::{
    Router,
    extract::{Path, State, rejection::PathRejection},
    response::Json,
    routing::get,
};
use trivia_domain::CategoryId;

use super::responses::{CategoriesResponse, CategoryQuestionsResponse};
use super::{AppState, HttpError};

async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, HttpError> {
    let categories = state.list_categories.execute().await?;
    Ok(Json(CategoriesResponse::new(categories)))
}

/// A non-integer id is treated as an unknown route.
async fn questions_by_category(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<CategoryQuestionsResponse>, HttpError> {
    let Path(id) = id.map_err(|_| HttpError::not_found())?;
    let result = state.filter.by_category(CategoryId::new(id)).await?;
    Ok(Json(result.into()))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/:id/questions", get(questions_by_category))
        .with_state(state)
}
