// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types: spoken domain errors and HTTP-level application errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Domain errors raised while handling a skill request.
///
/// Every variant has a spoken rendering (see [`SkillError::speech`]) so the
/// session can answer the user instead of failing the HTTP request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillError {
    #[error("required slot '{0}' is missing")]
    SlotMissing(&'static str),

    #[error("activity not found: {0}")]
    ActivityNotFound(String),

    #[error("{person} is not assigned to {activity}")]
    PersonNotFound { person: String, activity: String },

    #[error("activity already exists: {0}")]
    ActivityAlreadyExists(String),

    #[error("{person} is already assigned to {activity}")]
    PersonAlreadyPresent { person: String, activity: String },

    #[error("no one is assigned to {0}")]
    EmptyPeopleList(String),

    #[error("unrecognized intent: {0}")]
    UnrecognizedIntent(String),

    #[error("persistence failure: {0}")]
    Persistence(String),
}

impl SkillError {
    /// Sentence spoken back to the user for this error.
    pub fn speech(&self) -> String {
        match self {
            SkillError::SlotMissing("person") => {
                "There was an error finding that person's name".to_string()
            }
            SkillError::SlotMissing(_) => "There was an error with your activity name".to_string(),
            SkillError::ActivityNotFound(_) => "There is no activity by that name".to_string(),
            SkillError::PersonNotFound { .. } => "There is no person by that name".to_string(),
            SkillError::ActivityAlreadyExists(activity) => {
                format!("{activity} is already added in the list of activities")
            }
            SkillError::PersonAlreadyPresent { person, activity } => {
                format!("{person} is already added to {activity}")
            }
            SkillError::EmptyPeopleList(_) => {
                "There is no one currently assigned to this activity".to_string()
            }
            SkillError::UnrecognizedIntent(_) => {
                "Sorry, I didn't understand that. Try asking for help".to_string()
            }
            SkillError::Persistence(_) => {
                "Sorry, I can't reach your activities right now. Please try again later".to_string()
            }
        }
    }

    /// Whether answering this error should close the conversation.
    pub fn ends_session(&self) -> bool {
        matches!(self, SkillError::Persistence(_))
    }
}

impl From<AppError> for SkillError {
    fn from(err: AppError) -> Self {
        SkillError::Persistence(err.to_string())
    }
}

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Forbidden(msg) => {
                tracing::warn!(reason = %msg, "Rejected skill request");
                (StatusCode::FORBIDDEN, "forbidden", None)
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg.clone())),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::Database(msg) => {
                tracing::error!(error = %msg, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error", None)
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
