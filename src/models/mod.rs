// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod echo;
pub mod user;

pub use activity::{Activity, TurnOutcome, TurnRepair};
pub use echo::{EchoRequest, EchoResponse, RequestKind};
pub use user::User;

/// Join names the way the skill speaks them: every name followed by a
/// space, with the last one introduced by " and ".
pub(crate) fn spoken_list<S: AsRef<str>>(names: &[S]) -> String {
    let mut out = String::new();
    for (i, name) in names.iter().enumerate() {
        if i + 1 == names.len() {
            out.push_str(" and ");
        }
        out.push_str(name.as_ref());
        out.push(' ');
    }
    out
}
