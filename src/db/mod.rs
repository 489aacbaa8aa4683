//! Database layer (Firestore, with an in-memory stand-in).

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryStore;

use crate::error::AppError;
use crate::models::User;
use std::future::Future;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
}

/// Document store holding one `User` document per voice-platform user.
///
/// Writes replace the whole document; there is no version check, so the
/// last writer wins.
pub trait UserStore: Clone + Send + Sync + 'static {
    /// Look up a user by id. `Ok(None)` when no document exists.
    fn find_user(&self, id: &str) -> impl Future<Output = Result<Option<User>, AppError>> + Send;

    /// Create a user document. Fails if one already exists.
    fn insert_user(&self, user: &User) -> impl Future<Output = Result<(), AppError>> + Send;

    /// Create or fully overwrite a user document.
    fn upsert_user(&self, user: &User) -> impl Future<Output = Result<(), AppError>> + Send;
}
