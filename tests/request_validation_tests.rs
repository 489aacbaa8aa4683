// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Skill endpoint request validation tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;
use whose_turn::config::Config;

mod common;
use common::{intent_request, post_skill};

const USER: &str = "amzn1.ask.account.VALIDATION";

#[tokio::test]
async fn test_wrong_application_id_forbidden() {
    let (app, store) = common::create_test_app();
    let mut payload = intent_request(USER, "ListActivities", &[]);
    payload["session"]["application"]["applicationId"] = json!("amzn1.ask.skill.someone-else");

    let (status, _) = post_skill(&app, &payload).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_any_application_when_unconfigured() {
    let config = Config {
        skill_app_id: None,
        ..Config::test_default()
    };
    let (app, _) = common::create_test_app_with(config);
    let mut payload = intent_request(USER, "ListActivities", &[]);
    payload["session"]["application"]["applicationId"] = json!("amzn1.ask.skill.someone-else");

    let (status, _) = post_skill(&app, &payload).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_stale_timestamp_rejected() {
    let (app, store) = common::create_test_app();
    let mut payload = intent_request(USER, "AddActivity", &[("activity", "dishes")]);
    payload["request"]["timestamp"] = json!("2016-01-01T00:00:00Z");

    let (status, _) = post_skill(&app, &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_missing_user_id_rejected() {
    let (app, store) = common::create_test_app();
    let payload = intent_request("", "ListActivities", &[]);

    let (status, _) = post_skill(&app, &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_malformed_envelope_rejected() {
    let (app, _) = common::create_test_app();
    let payload = json!({ "session": {}, "request": { "intent": "nope" } });

    let (status, body) = post_skill(&app, &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_offline_store_apologizes() {
    let app = common::create_offline_test_app();
    let resp = common::ask(&app, &intent_request(USER, "ListActivities", &[])).await;
    assert_eq!(
        resp.text(),
        Some("Sorry, I can't reach your activities right now. Please try again later")
    );
    assert!(resp.ends_session());
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = common::create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "ok");
}
