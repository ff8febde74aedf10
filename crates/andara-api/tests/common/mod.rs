//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use andara_core::clock::Clock;
use andara_core::id::IdGenerator;
use andara_test_support::{FixedClock, SequenceIdGenerator, fixed_now};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use andara_api::state::AppState;

/// Build the full app router with a fixed clock and scripted event ids.
/// Uses the same route structure as `main.rs`.
pub fn build_test_app(event_ids: Vec<Uuid>) -> Router {
    build_test_app_with(
        Arc::new(FixedClock(fixed_now())),
        Arc::new(SequenceIdGenerator::new(event_ids)),
    )
}

/// Build the full app router with arbitrary collaborators.
pub fn build_test_app_with(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Router {
    andara_api::app(AppState::new(clock, ids))
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
