#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use projectdesk_core::clock::{Clock, FixedClock};
use tower::ServiceExt;

use projectdesk_api::config::ServerConfig;
use projectdesk_api::router::build_app_router;
use projectdesk_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config(seed_demo_data: bool) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        seed_demo_data,
    }
}

/// The instant every test clock is frozen at: 2025-06-15T12:00:00Z.
pub fn test_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()))
}

/// Build the full application router over an empty store.
///
/// The router is cloneable and shares one store across clones, so a test
/// can issue several requests against the same state.
pub fn build_test_app() -> Router {
    build_app(false, test_clock())
}

/// Build the full application router over the demo seed data.
pub fn build_seeded_app() -> Router {
    build_app(true, test_clock())
}

pub fn build_app(seed_demo_data: bool, clock: Arc<dyn Clock>) -> Router {
    let config = test_config(seed_demo_data);
    let state = AppState::with_clock(config.clone(), clock);
    build_app_router(state, &config)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A complete, valid create payload.
pub fn valid_project() -> serde_json::Value {
    serde_json::json!({
        "name": "Checkout Rewrite",
        "description": "Rebuild the checkout flow on the new payments API",
        "status": "active",
        "priority": "high",
        "startDate": "2025-01-06",
        "endDate": "2025-11-28",
    })
}
