// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod intent;
pub mod session;
pub mod verify;

pub use intent::{Intent, IntentRouter, Reply, SlotSource};
pub use session::UserSession;
pub use verify::verify_request;
