// Not every test binary exercises every helper.
#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use storage::{
    Database,
    repository::{CategoryRepository, TrainingCenterRepository},
};
use tower::ServiceExt;

/// Fresh application over an in-memory database, with one category ("Elite")
/// and one training center ("Gym1") already registered.
pub async fn setup_app() -> Router {
    let db = Database::new_in_memory()
        .await
        .expect("open in-memory database");
    db.run_migrations().await.expect("run migrations");

    CategoryRepository::new(db.pool())
        .create("Elite")
        .await
        .expect("seed category");
    TrainingCenterRepository::new(db.pool())
        .create("Gym1")
        .await
        .expect("seed training center");

    web::app(db)
}

/// Execute one request against the router and return the status plus the
/// decoded body. Non-JSON bodies (extractor rejections, empty 204 bodies)
/// come back as a plain string or null.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("execute request");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}
