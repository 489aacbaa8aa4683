// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Voice-platform request and response envelopes (Alexa skill JSON).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inbound skill request.
#[derive(Debug, Clone, Deserialize)]
pub struct EchoRequest {
    #[serde(default)]
    pub session: EchoSession,
    #[serde(default)]
    pub context: Option<EchoContext>,
    pub request: EchoRequestBody,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoSession {
    #[serde(default)]
    pub application: EchoApplication,
    #[serde(default)]
    pub user: EchoUser,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoApplication {
    #[serde(default)]
    pub application_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoUser {
    #[serde(default)]
    pub user_id: String,
}

/// Device context; carries the same application/user ids as the session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EchoContext {
    #[serde(rename = "System", default)]
    pub system: Option<EchoSystem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EchoSystem {
    #[serde(default)]
    pub application: Option<EchoApplication>,
    #[serde(default)]
    pub user: Option<EchoUser>,
}

/// Request kinds the skill distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RequestKind {
    #[serde(rename = "LaunchRequest")]
    Launch,
    #[serde(rename = "IntentRequest")]
    Intent,
    #[serde(rename = "SessionEndedRequest")]
    SessionEnded,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoRequestBody {
    #[serde(rename = "type")]
    pub kind: RequestKind,
    #[serde(default)]
    pub request_id: String,
    /// ISO 8601 time the platform sent the request
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub intent: Option<EchoIntent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EchoIntent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, EchoSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EchoSlot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl EchoRequest {
    pub fn kind(&self) -> RequestKind {
        self.request.kind
    }

    /// User id from the session, falling back to the device context.
    pub fn user_id(&self) -> &str {
        if !self.session.user.user_id.is_empty() {
            return &self.session.user.user_id;
        }
        self.context
            .as_ref()
            .and_then(|c| c.system.as_ref())
            .and_then(|s| s.user.as_ref())
            .map_or("", |u| u.user_id.as_str())
    }

    /// Application id from the session, falling back to the device context.
    pub fn application_id(&self) -> &str {
        if !self.session.application.application_id.is_empty() {
            return &self.session.application.application_id;
        }
        self.context
            .as_ref()
            .and_then(|c| c.system.as_ref())
            .and_then(|s| s.application.as_ref())
            .map_or("", |a| a.application_id.as_str())
    }

    pub fn intent_name(&self) -> Option<&str> {
        self.request.intent.as_ref().map(|i| i.name.as_str())
    }

    /// Value of a named slot.
    ///
    /// Slot names are matched exactly first, then ignoring ASCII case.
    /// Empty values count as missing.
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        let slots = &self.request.intent.as_ref()?.slots;
        let slot = slots.get(name).or_else(|| {
            slots
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, slot)| slot)
        })?;
        slot.value.as_deref().filter(|v| !v.is_empty())
    }
}

/// Outbound skill response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoResponse {
    pub version: String,
    pub response: EchoResponseBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl EchoResponse {
    /// Plain-text speech response.
    pub fn speak(text: impl Into<String>, end_session: bool) -> Self {
        Self {
            version: "1.0".to_string(),
            response: EchoResponseBody {
                output_speech: Some(OutputSpeech {
                    kind: "PlainText".to_string(),
                    text: text.into(),
                }),
                should_end_session: end_session,
            },
        }
    }

    /// Spoken text, if any.
    pub fn text(&self) -> Option<&str> {
        self.response.output_speech.as_ref().map(|s| s.text.as_str())
    }

    pub fn ends_session(&self) -> bool {
        self.response.should_end_session
    }
}
