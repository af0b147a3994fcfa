use crate::AppConfig;
use crate::app::create_router;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use quizmaster_core::quiz::QuizRules;
use quizmaster_db::schema::setup_schema;
use quizmaster_test_helpers::quiz::draft;
use quizmaster_test_helpers::{SqliteDb, TestDb};
use sea_orm::{Database, DatabaseBackend, DbErr, MockDatabase};
use serde_json::{Value, json};
use test_log::test;
use tower::ServiceExt;

async fn create_app() -> (SqliteDb, Router) {
    let sqlite_db = SqliteDb::new().unwrap();
    let conn = Database::connect(sqlite_db.db_uri().as_ref()).await.unwrap();
    setup_schema(&conn).await.unwrap();
    let app = create_router(AppConfig::new(QuizRules::default()), conn);
    (sqlite_db, app)
}

fn failing_app(store: MockDatabase) -> Router {
    create_router(AppConfig::new(QuizRules::default()), store.into_connection())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn ids(quizzes: &Value) -> Vec<&str> {
    quizzes
        .as_array()
        .unwrap()
        .iter()
        .map(|quiz| quiz["id"].as_str().unwrap())
        .collect()
}

#[test(tokio::test)]
async fn test_create_publish_and_list() {
    let (_db, app) = create_app().await;

    let (status, body) = send(&app, Method::POST, "/api/quizzes", Some(json!(draft(9)))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": false, "message": "At least 10 questions required" }));

    let (status, body) = send(&app, Method::POST, "/api/quizzes", Some(json!(draft(10)))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    let id = body["id"].as_str().unwrap().to_owned();

    let (_, drafts) = send(&app, Method::GET, "/api/quizzes?status=draft", None).await;
    assert_eq!(ids(&drafts), vec![id.as_str()]);

    let (status, body) = send(&app, Method::PUT, &format!("/api/quizzes/{id}/publish"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (_, published) = send(&app, Method::GET, "/api/quizzes?status=published", None).await;
    assert_eq!(ids(&published), vec![id.as_str()]);
    assert_eq!(published[0]["questions"].as_array().unwrap().len(), 10);

    let (_, published) = send(&app, Method::GET, "/api/quizzes/published", None).await;
    assert_eq!(ids(&published), vec![id.as_str()]);

    let (_, drafts) = send(&app, Method::GET, "/api/quizzes?status=draft", None).await;
    assert!(ids(&drafts).is_empty());

    let (_, all) = send(&app, Method::GET, "/api/quizzes", None).await;
    assert_eq!(ids(&all), vec![id.as_str()]);
}

#[test(tokio::test)]
async fn test_get_quiz() {
    let (_db, app) = create_app().await;

    let (_, body) = send(&app, Method::POST, "/api/quizzes", Some(json!(draft(10)))).await;
    let id = body["id"].as_str().unwrap().to_owned();

    let (status, quiz) = send(&app, Method::GET, &format!("/api/quizzes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(quiz["id"], json!(id));
    assert_eq!(quiz["title"], json!("Arithmetic"));
    assert_eq!(quiz["timeLimit"], json!(20));
    assert_eq!(quiz["status"], json!("draft"));
    assert_eq!(quiz["questions"][0]["type"], json!("MCQ"));
    assert_eq!(quiz["questions"][0]["questionText"], json!("What is 1 + 1?"));
}

#[test(tokio::test)]
async fn test_get_unknown_quiz_is_not_found() {
    let (_db, app) = create_app().await;

    let (status, body) = send(&app, Method::GET, "/api/quizzes/does-not-exist", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "message": "Quiz not found" }));
}

#[test(tokio::test)]
async fn test_publish_unknown_quiz() {
    let (_db, app) = create_app().await;

    let (status, body) = send(&app, Method::PUT, "/api/quizzes/does-not-exist/publish", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": false, "message": "Quiz not found" }));
}

#[test(tokio::test)]
async fn test_publish_twice_succeeds() {
    let (_db, app) = create_app().await;
    let (_, body) = send(&app, Method::POST, "/api/quizzes", Some(json!(draft(12)))).await;
    let id = body["id"].as_str().unwrap().to_owned();
    let uri = format!("/api/quizzes/{id}/publish");

    let (_, first) = send(&app, Method::PUT, &uri, None).await;
    let (_, second) = send(&app, Method::PUT, &uri, None).await;

    assert_eq!(first, json!({ "success": true }));
    assert_eq!(second, json!({ "success": true }));
}

#[test(tokio::test)]
async fn test_client_supplied_id_is_replaced() {
    let (_db, app) = create_app().await;
    let mut submitted = json!(draft(10));
    submitted["id"] = json!("chosen-by-client");

    let (_, body) = send(&app, Method::POST, "/api/quizzes", Some(submitted)).await;

    assert_eq!(body["success"], json!(true));
    assert_ne!(body["id"], json!("chosen-by-client"));
    let (status, _) = send(&app, Method::GET, "/api/quizzes/chosen-by-client", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test(tokio::test)]
async fn test_malformed_body_is_client_error() {
    let (_db, app) = create_app().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/quizzes")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());

    let mut unknown_status = json!(draft(10));
    unknown_status["status"] = json!("archived");
    let (status, _) = send(&app, Method::POST, "/api/quizzes", Some(unknown_status)).await;
    assert!(status.is_client_error());

    let (_, all) = send(&app, Method::GET, "/api/quizzes", None).await;
    assert!(ids(&all).is_empty());
}

#[test(tokio::test)]
async fn test_status_reports_database() {
    let (_db, app) = create_app().await;

    let (status, body) = send(&app, Method::GET, "/api/status", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "database": "ok" }));
}

#[test(tokio::test)]
async fn test_unknown_status_filter_matches_nothing() {
    let (_db, app) = create_app().await;
    send(&app, Method::POST, "/api/quizzes", Some(json!(draft(10)))).await;

    let (status, body) = send(&app, Method::GET, "/api/quizzes?status=archived", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send(&app, Method::GET, "/api/quizzes?status=", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[test(tokio::test)]
async fn test_store_fault_on_list_is_internal_error() {
    let app = failing_app(
        MockDatabase::new(DatabaseBackend::Postgres).append_query_errors([DbErr::Custom("connection reset".to_owned())]),
    );

    let (status, body) = send(&app, Method::GET, "/api/quizzes", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "message": "Internal server error" }));
}

#[test(tokio::test)]
async fn test_store_fault_on_create_is_internal_error() {
    let app = failing_app(
        MockDatabase::new(DatabaseBackend::Postgres).append_exec_errors([DbErr::Custom("connection reset".to_owned())]),
    );

    let (status, body) = send(&app, Method::POST, "/api/quizzes", Some(json!(draft(10)))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "message": "Internal server error" }));
}

#[test(tokio::test)]
async fn test_store_fault_on_publish_is_internal_error() {
    let app = failing_app(
        MockDatabase::new(DatabaseBackend::Postgres).append_query_errors([DbErr::Custom("connection reset".to_owned())]),
    );

    let (status, body) = send(&app, Method::PUT, "/api/quizzes/q-1/publish", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "message": "Internal server error" }));
}
