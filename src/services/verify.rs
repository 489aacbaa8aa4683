// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Inbound skill request checks.
//!
//! Requests must name our skill's application id and carry a timestamp
//! close to the current time, which bounds replay of captured requests.

use crate::config::Config;
use crate::error::AppError;
use crate::models::EchoRequest;
use chrono::{DateTime, Utc};

/// Check the application id and request timestamp.
pub fn verify_request(
    config: &Config,
    request: &EchoRequest,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    if let Some(expected) = config.skill_app_id.as_deref() {
        let received = request.application_id();
        if received != expected {
            tracing::warn!(
                received_app_id = %received,
                "Security Alert: Skill application ID mismatch"
            );
            return Err(AppError::Forbidden("application id mismatch".to_string()));
        }
    }

    let sent_at = DateTime::parse_from_rfc3339(&request.request.timestamp)
        .map_err(|e| AppError::BadRequest(format!("Invalid request timestamp: {}", e)))?
        .with_timezone(&Utc);

    let skew = (now - sent_at).num_seconds().abs();
    if skew > config.request_tolerance_secs {
        tracing::warn!(
            skew_secs = skew,
            tolerance_secs = config.request_tolerance_secs,
            "Rejecting skill request with stale timestamp"
        );
        return Err(AppError::BadRequest(
            "Request timestamp outside tolerance".to_string(),
        ));
    }

    Ok(())
}
