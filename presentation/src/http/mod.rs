//! JSON HTTP API
//!
//! Routes are grouped by resource, one module each, and merged into a
//! single router here:
//! - `category_endpoints`: category listing and per-category questions
//! - `question_endpoints`: paging, create, delete and search
//! - `quiz_endpoints`: quiz play
//!
//! Every error, including unknown routes and wrong methods, is answered
//! with the JSON body described in [`HttpError`].

use axum::{
    Router,
    http::{HeaderValue, Method, StatusCode, header, header::InvalidHeaderValue},
    middleware,
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use trivia_application::{
    BrowseConfig, CategoryStore, CreateQuestionUseCase, DeleteQuestionUseCase,
    ListCategoriesUseCase, ListQuestionsUseCase, PlayQuizUseCase, QuestionFilter, QuestionStore,
};
use trivia_domain::PoolPicker;

mod category_endpoints;
mod error;
mod question_endpoints;
mod quiz_endpoints;
pub mod requests;
pub mod responses;

#[cfg(test)]
mod tests;

pub use error::HttpError;

/// Use cases shared by every endpoint
#[derive(Clone)]
pub struct AppState {
    pub list_categories: ListCategoriesUseCase,
    pub list_questions: ListQuestionsUseCase,
    pub filter: QuestionFilter,
    pub create_question: CreateQuestionUseCase,
    pub delete_question: DeleteQuestionUseCase,
    pub play_quiz: PlayQuizUseCase,
}

impl AppState {
    pub fn new(
        questions: Arc<dyn QuestionStore>,
        categories: Arc<dyn CategoryStore>,
        picker: Arc<dyn PoolPicker>,
        browse: BrowseConfig,
    ) -> Self {
        let filter = QuestionFilter::new(questions.clone(), categories.clone());
        Self {
            list_categories: ListCategoriesUseCase::new(categories.clone()),
            list_questions: ListQuestionsUseCase::new(filter.clone(), categories, browse),
            filter,
            create_question: CreateQuestionUseCase::new(questions.clone()),
            delete_question: DeleteQuestionUseCase::new(questions.clone()),
            play_quiz: PlayQuizUseCase::new(questions, picker),
        }
    }
}

/// Create the application router with all endpoint modules
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .merge(category_endpoints::routes(state.clone()))
        .merge(question_endpoints::routes(state.clone()))
        .merge(quiz_endpoints::routes(state))
        .fallback(route_not_found)
        .layer(middleware::map_response(method_not_allowed_as_json))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// CORS for the browser frontend
///
/// `"*"` allows any origin; anything else must be a single exact origin.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let allow_origin = if origin == "*" {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::exact(origin.parse::<HeaderValue>()?)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

async fn route_not_found() -> HttpError {
    HttpError::not_found()
}

/// Axum answers a known path with the wrong method with an empty 405.
async fn method_not_allowed_as_json(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut json = HttpError::method_not_allowed().into_response();
    if let Some(allow) = allow {
        json.headers_mut().insert(header::ALLOW, allow);
    }
    json
}

/// Serve until Ctrl-C
pub async fn serve(router: Router, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Trivia API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
