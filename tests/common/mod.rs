//! Shared helpers for integration tests.
//!
//! Every test gets its own in-memory SQLite store with migrations applied.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method, Request, StatusCode,
    },
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use telewebmanager_api::api::{create_router, AppState};
use telewebmanager_api::config::Config;
use telewebmanager_api::infra::{Database, Persistence};

pub const TOKEN: &str = "test-token";

pub fn test_config() -> Config {
    let mut config = Config::new("sqlite::memory:", TOKEN);
    // One connection, so every unit of work sees the same in-memory store
    config.db_max_connections = 1;
    config
}

pub async fn setup_database() -> Arc<Database> {
    let database = Database::connect(&test_config())
        .await
        .expect("in-memory database should start");
    Arc::new(database)
}

pub async fn setup_persistence() -> (Arc<Database>, Arc<Persistence>) {
    let database = setup_database().await;
    let uow = Arc::new(Persistence::new(database.get_connection()));
    (database, uow)
}

pub async fn setup_app() -> Router {
    let database = setup_database().await;
    create_router(AppState::from_config(database, &test_config()))
}

/// Send a request with the test token.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    send_with_auth(app, method, uri, body, Some(&format!("Bearer {TOKEN}"))).await
}

/// Send a request with an arbitrary (or no) `Authorization` header.
pub async fn send_with_auth(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    authorization: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(AUTHORIZATION, value);
    }

    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}
