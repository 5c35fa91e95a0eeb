use super::*;
use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::collections::HashSet;
use tower::ServiceExt;
use trivia_domain::{Category, NewQuestion};
use trivia_infrastructure::{InMemoryCategoryStore, InMemoryQuestionStore, SeededPicker};

async fn app_with(questions: &[(&str, i64)]) -> Router {
    let categories = Arc::new(InMemoryCategoryStore::new([
        Category::new(1, "Science"),
        Category::new(2, "Art"),
    ]));
    let store = Arc::new(InMemoryQuestionStore::new(categories.clone()));
    for (text, category) in questions {
        store
            .insert(NewQuestion::new(*text, "answer", 1, *category))
            .await
            .unwrap();
    }

    let state = AppState::new(
        store,
        categories,
        Arc::new(SeededPicker::new(7)),
        BrowseConfig::default(),
    );
    create_router(state, cors_layer("*").unwrap())
}

async fn numbered_app(count: usize) -> Router {
    let texts: Vec<String> = (1..=count).map(|i| format!("Question {i}")).collect();
    let questions: Vec<(&str, i64)> = texts.iter().map(|t| (t.as_str(), 1)).collect();
    app_with(&questions).await
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(raw) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(raw.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, method, uri, Some(&body.to_string())).await
}

fn ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

fn error_body(code: u16, message: &str) -> Value {
    json!({"success": false, "error": code, "message": message})
}

#[tokio::test]
async fn test_list_categories() {
    let app = numbered_app(0).await;
    let (status, body) = send(&app, Method::GET, "/categories", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "categories": {"1": "Science", "2": "Art"}})
    );
}

#[tokio::test]
async fn test_second_page_of_twelve() {
    let app = numbered_app(12).await;
    let (status, body) = send(&app, Method::GET, "/questions?page=2", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![11, 12]);
    assert_eq!(body["total_questions"], 12);
    assert_eq!(body["current_category"], Value::Null);
    assert_eq!(body["categories"]["2"], "Art");
}

#[tokio::test]
async fn test_page_parameter_handling() {
    let app = numbered_app(12).await;

    let (status, body) = send(&app, Method::GET, "/questions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), (1..=10).collect::<Vec<_>>());

    let (status, body) = send(&app, Method::GET, "/questions?page=abc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body).len(), 10);

    let (status, body) = send(&app, Method::GET, "/questions?page=3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, error_body(404, "Resource not found"));

    let (status, _) = send(&app, Method::GET, "/questions?page=0", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_repeated_and_garbled_page_parameters() {
    let app = numbered_app(12).await;

    let (status, body) = send(&app, Method::GET, "/questions?page=2&page=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![11, 12]);

    let (status, body) = send(&app, Method::GET, "/questions?%zz=&&page", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body).len(), 10);
}

#[tokio::test]
async fn test_delete_question() {
    let app = numbered_app(3).await;

    let (status, body) = send(&app, Method::DELETE, "/questions/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "message": "Question successfully deleted"})
    );

    let (_, body) = send(&app, Method::GET, "/questions", None).await;
    assert_eq!(ids(&body), vec![1, 3]);
}

#[tokio::test]
async fn test_delete_absent_question() {
    let app = numbered_app(3).await;

    let (status, body) = send(&app, Method::DELETE, "/questions/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, error_body(404, "Resource not found"));

    let (status, _) = send(&app, Method::DELETE, "/questions/five", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_question() {
    let app = numbered_app(0).await;
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/questions",
        json!({
            "question": "What is the boiling point of water?",
            "answer": "100C",
            "difficulty": 1,
            "category": "1"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({"success": true, "message": "Question successfully created!"})
    );

    let (_, body) = send(&app, Method::GET, "/questions", None).await;
    assert_eq!(body["total_questions"], 1);
    assert_eq!(body["questions"][0]["answer"], "100C");
    assert_eq!(body["questions"][0]["category"], 1);
}

#[tokio::test]
async fn test_create_missing_answer() {
    let app = numbered_app(0).await;
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/questions",
        json!({"question": "Q", "difficulty": 1, "category": 1}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, error_body(422, "Unprocessable entity"));
}

#[tokio::test]
async fn test_create_unknown_category() {
    let app = numbered_app(0).await;
    let (status, _) = send_json(
        &app,
        Method::POST,
        "/questions",
        json!({"question": "Q", "answer": "A", "difficulty": 1, "category": 99}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_malformed_create_body() {
    let app = numbered_app(0).await;
    let (status, body) = send(&app, Method::POST, "/questions", Some("{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, error_body(400, "Bad request error"));
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let app = app_with(&[
        ("What is the Title of this book?", 2),
        ("Who wrote it?", 2),
        ("The title track of the album?", 1),
    ])
    .await;

    let (status, upper) = send_json(
        &app,
        Method::POST,
        "/questions/search",
        json!({"searchTerm": "TITLE"}),
    )
    .await;
    let (_, lower) = send_json(
        &app,
        Method::POST,
        "/questions/search",
        json!({"searchTerm": "title"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&upper), vec![1, 3]);
    assert_eq!(upper, lower);
    assert_eq!(upper["total_questions"], 2);
}

#[tokio::test]
async fn test_search_failures() {
    let app = app_with(&[("What is a photon?", 1)]).await;

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/questions/search",
        json!({"searchTerm": ""}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send_json(&app, Method::POST, "/questions/search", json!({})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/questions/search",
        json!({"searchTerm": "volcano"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_questions_by_category() {
    let app = app_with(&[("Q1", 1), ("Q2", 2), ("Q3", 1)]).await;

    let (status, body) = send(&app, Method::GET, "/categories/1/questions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 3]);
    assert_eq!(body["total_questions"], 2);
    assert_eq!(body["current_category"], "Science");

    let (status, body) = send(&app, Method::GET, "/categories/99/questions", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, error_body(422, "Unprocessable entity"));
}

#[tokio::test]
async fn test_quiz_scope_exhausted() {
    let app = app_with(&[
        ("Q1", 2),
        ("Q2", 2),
        ("Q3", 1),
        ("Q4", 2),
        ("Q5", 2),
        ("Q6", 2),
        ("Q7", 2),
    ])
    .await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/quizzes",
        json!({
            "quiz_category": {"type": "Science", "id": 1},
            "previous_questions": [3, 7]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "question": null}));
}

#[tokio::test]
async fn test_quiz_draws_every_question_once() {
    let app = numbered_app(5).await;
    let mut asked: Vec<i64> = Vec::new();

    loop {
        let (status, body) = send_json(
            &app,
            Method::POST,
            "/quizzes",
            json!({
                "quiz_category": {"type": "click", "id": 0},
                "previous_questions": asked
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        match body["question"]["id"].as_i64() {
            Some(id) => {
                assert!(!asked.contains(&id));
                asked.push(id);
            }
            None => break,
        }
    }

    let drawn: HashSet<i64> = asked.into_iter().collect();
    assert_eq!(drawn, (1..=5).collect());
}

#[tokio::test]
async fn test_quiz_rejections() {
    let app = numbered_app(2).await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/quizzes",
        json!({"quiz_category": {"type": "Science", "id": 1}}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, error_body(422, "Unprocessable entity"));

    let (status, _) = send(&app, Method::POST, "/quizzes", Some("[1, 2")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/quizzes",
        json!({"quiz_category": {"type": "Science"}, "previous_questions": []}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_quiz_with_long_history() {
    let app = numbered_app(3).await;
    let asked: Vec<i64> = (1..=5_000).filter(|id| *id != 2).collect();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/quizzes",
        json!({"quiz_category": {"type": "", "id": 0}, "previous_questions": asked}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["id"], 2);
}

#[tokio::test]
async fn test_framework_errors_are_json() {
    let app = numbered_app(0).await;

    let (status, body) = send(&app, Method::GET, "/quizzes", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, error_body(405, "Method not allowed"));

    let (status, body) = send(&app, Method::GET, "/nowhere", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, error_body(404, "Resource not found"));
}

#[tokio::test]
async fn test_cors_headers() {
    let app = numbered_app(0).await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/categories")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[test]
fn test_cors_layer_rejects_invalid_origin() {
    assert!(cors_layer("http://localhost:3000").is_ok());
    assert!(cors_layer("bad\norigin").is_err());
}
