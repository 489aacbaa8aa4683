// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Skill endpoint called by the voice platform.

use crate::config::SKILL_PATH;
use crate::db::UserStore;
use crate::error::{AppError, Result};
use crate::models::{EchoRequest, EchoResponse};
use crate::services::{verify_request, UserSession};
use crate::AppState;
use axum::{
    extract::{Json, State},
    routing::post,
    Router,
};
use std::sync::Arc;

/// Skill routes.
pub fn routes<S: UserStore>() -> Router<Arc<AppState<S>>> {
    Router::new().route(SKILL_PATH, post(handle_request::<S>))
}

/// Handle one skill request (POST).
async fn handle_request<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<EchoResponse>> {
    let request: EchoRequest = serde_json::from_value(payload).map_err(|e| {
        tracing::warn!(error = %e, "Failed to parse skill request");
        AppError::BadRequest(format!("Malformed skill request: {}", e))
    })?;

    verify_request(&state.config, &request, chrono::Utc::now())?;

    if request.user_id().is_empty() {
        return Err(AppError::BadRequest("Missing user id".to_string()));
    }

    tracing::info!(
        request_id = %request.request.request_id,
        request_type = ?request.kind(),
        intent = request.intent_name().unwrap_or("-"),
        user_id = %request.user_id(),
        "Skill request received"
    );

    // The session owns its own store handle, released when the request ends.
    let session = UserSession::new(state.store.clone(), state.config.turn_repair);
    Ok(Json(session.handle(&request).await))
}
