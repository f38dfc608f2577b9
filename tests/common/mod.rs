//! Shared helpers for black-box API tests: an app over an in-memory
//! database plus small request wrappers.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use liftr::config::Config;
use liftr::AppState;

pub async fn test_app() -> Router {
    test_app_with_config(Config::default()).await
}

pub async fn test_app_with_config(config: Config) -> Router {
    let db = liftr::db::init_in_memory()
        .await
        .expect("in-memory database");
    let state = Arc::new(AppState::new(config, db));
    liftr::api::create_router(state)
}

pub async fn send(
    app: &Router,
    method: &str,
    path: &str,
    body: Option<Value>,
    headers: &[(&str, &str)],
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

pub async fn post(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", path, Some(body), &[]).await
}

pub async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
    send(app, "GET", path, None, &[]).await
}

pub async fn put(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    send(app, "PUT", path, Some(body), &[]).await
}

pub async fn delete(app: &Router, path: &str) -> (StatusCode, Value) {
    send(app, "DELETE", path, None, &[]).await
}

/// Create a record and return its id.
pub async fn create_id(app: &Router, path: &str, body: Value) -> String {
    let (status, json) = post(app, path, body).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {}", json);
    json["data"]["id"].as_str().expect("id").to_string()
}
