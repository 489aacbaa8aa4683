// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Whose Turn: a voice skill that tracks whose turn it is for shared chores
//!
//! This crate provides the skill backend: it keeps a per-user list of
//! activities, rotates turns between the people on each one, and answers
//! voice-platform intent requests with spoken text.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;

/// Shared application state.
pub struct AppState<S = FirestoreDb> {
    pub config: Config,
    pub store: S,
}
