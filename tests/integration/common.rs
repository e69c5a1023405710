//! Shared helpers for API tests

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use mockable::DefaultClock;
use serde_json::Value;
use tower::ServiceExt;

use biblioteca_server::{
    api,
    config::{AppConfig, DatabaseConfig},
    repository::{self, Repository},
    services::Services,
    AppState,
};

/// Router backed by a fresh in-memory database
pub async fn test_app() -> Router {
    let config = AppConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            busy_timeout_secs: 1,
        },
        ..AppConfig::default()
    };

    let pool = repository::connect(&config.database)
        .await
        .expect("Failed to open in-memory database");
    repository::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let services = Services::new(Repository::new(pool), Arc::new(DefaultClock));
    api::create_router(AppState {
        services: Arc::new(services),
    })
}

/// Send a request and decode the JSON response body
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(format!("/api/v1{}", uri));
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };

    (status, value)
}
