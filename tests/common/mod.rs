// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use whose_turn::config::{Config, SKILL_PATH};
use whose_turn::db::{FirestoreDb, MemoryStore};
use whose_turn::models::EchoResponse;
use whose_turn::routes::create_router;
use whose_turn::AppState;

/// Application id accepted by `Config::test_default()`.
#[allow(dead_code)]
pub const APP_ID: &str = "amzn1.ask.skill.test";

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a test app backed by an in-memory store.
/// Returns the router and the store so tests can inspect saved documents.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, MemoryStore) {
    create_test_app_with(Config::test_default())
}

#[allow(dead_code)]
pub fn create_test_app_with(config: Config) -> (axum::Router, MemoryStore) {
    let store = MemoryStore::new();
    let state = Arc::new(AppState {
        config,
        store: store.clone(),
    });
    (create_router(state), store)
}

/// Create a test app whose store is offline; every storage call fails.
#[allow(dead_code)]
pub fn create_offline_test_app() -> axum::Router {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        store: FirestoreDb::new_mock(),
    });
    create_router(state)
}

/// Build a skill request envelope.
#[allow(dead_code)]
pub fn skill_request(user_id: &str, request: Value) -> Value {
    let mut request = request;
    request["requestId"] = json!("amzn1.echo-api.request.test");
    request["timestamp"] = json!(chrono::Utc::now().to_rfc3339());
    request["locale"] = json!("en-US");

    json!({
        "version": "1.0",
        "session": {
            "new": false,
            "sessionId": "amzn1.echo-api.session.test",
            "application": { "applicationId": APP_ID },
            "user": { "userId": user_id }
        },
        "request": request
    })
}

/// Build an intent request with `(slot, value)` pairs.
#[allow(dead_code)]
pub fn intent_request(user_id: &str, intent: &str, slots: &[(&str, &str)]) -> Value {
    let slots: serde_json::Map<String, Value> = slots
        .iter()
        .map(|(name, value)| (name.to_string(), json!({ "name": name, "value": value })))
        .collect();

    skill_request(
        user_id,
        json!({
            "type": "IntentRequest",
            "intent": { "name": intent, "slots": slots }
        }),
    )
}

/// POST a payload to the skill endpoint, returning the status and raw body.
#[allow(dead_code)]
pub async fn post_skill(app: &axum::Router, payload: &Value) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(SKILL_PATH)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    (status, body.to_vec())
}

/// POST a payload and decode the skill response, asserting 200 OK.
#[allow(dead_code)]
pub async fn ask(app: &axum::Router, payload: &Value) -> EchoResponse {
    let (status, body) = post_skill(app, payload).await;
    assert_eq!(status, StatusCode::OK, "body: {}", String::from_utf8_lossy(&body));
    serde_json::from_slice(&body).expect("valid skill response")
}
