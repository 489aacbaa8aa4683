// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-request user session.
//!
//! Handles the workflow for one skill request:
//! 1. Load the user document, creating it on first contact
//! 2. Answer launch / session-end requests, or dispatch the intent
//! 3. Save the full document if the intent changed it

use crate::db::UserStore;
use crate::error::SkillError;
use crate::models::{EchoRequest, EchoResponse, RequestKind, TurnRepair, User};
use crate::services::intent::{Intent, IntentRouter, GOODBYE_TEXT};
use crate::time_utils::now_rfc3339;

pub const WELCOME_TEXT: &str = "Welcome to Who's Next. What can I do for you?";

/// One request's view of the store.
pub struct UserSession<S: UserStore> {
    store: S,
    router: IntentRouter,
}

impl<S: UserStore> UserSession<S> {
    pub fn new(store: S, repair: TurnRepair) -> Self {
        Self {
            store,
            router: IntentRouter::new(repair),
        }
    }

    /// Load a user, creating and storing an empty document if none exists.
    ///
    /// If a concurrent request created the document first, that one is used.
    pub async fn load_user(&self, user_id: &str) -> Result<User, SkillError> {
        if let Some(user) = self.store.find_user(user_id).await? {
            return Ok(user);
        }

        let user = User::new(user_id, &now_rfc3339());
        if let Err(err) = self.store.insert_user(&user).await {
            return match self.store.find_user(user_id).await? {
                Some(existing) => {
                    tracing::debug!(user_id, "User created by a concurrent request");
                    Ok(existing)
                }
                None => Err(err.into()),
            };
        }
        tracing::info!(user_id, "Created new user");
        Ok(user)
    }

    /// Answer a skill request. Failures are spoken, never propagated.
    pub async fn handle(&self, request: &EchoRequest) -> EchoResponse {
        match self.respond(request).await {
            Ok(response) => response,
            Err(err) => {
                match &err {
                    SkillError::Persistence(detail) => tracing::error!(
                        user_id = %request.user_id(),
                        error = %detail,
                        "Persistence failure"
                    ),
                    other => tracing::warn!(error = %other, "Request not handled"),
                }
                EchoResponse::speak(err.speech(), err.ends_session())
            }
        }
    }

    async fn respond(&self, request: &EchoRequest) -> Result<EchoResponse, SkillError> {
        let mut user = self.load_user(request.user_id()).await?;

        match request.kind() {
            RequestKind::Launch => Ok(EchoResponse::speak(WELCOME_TEXT, false)),
            RequestKind::SessionEnded => Ok(EchoResponse::speak(GOODBYE_TEXT, true)),
            RequestKind::Intent => {
                let intent = Intent::from_name(request.intent_name().unwrap_or_default())?;
                let reply = self.router.dispatch(intent, request, &mut user);

                if reply.mutated {
                    user.updated_at = now_rfc3339();
                    self.store.upsert_user(&user).await?;
                    tracing::info!(
                        user_id = %user.id,
                        intent = intent.name(),
                        activities = user.activities.len(),
                        "User saved"
                    );
                }

                Ok(EchoResponse::speak(reply.speech, reply.end_session))
            }
            RequestKind::Other => Err(SkillError::UnrecognizedIntent(
                request.intent_name().unwrap_or("unknown request").to_string(),
            )),
        }
    }
}
