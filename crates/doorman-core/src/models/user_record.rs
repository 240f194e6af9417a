//! User record - the single entity held by the local record store.

use crate::LoginRequest;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored user. Records are append-only: once inserted they are never
/// updated, only bulk-cleared.
///
/// The password is carried and stored in plain text. That is a known defect
/// inherited from the system this replaces and is deliberately not fixed
/// here without a product decision (hashing would change the remote wire
/// contract as well).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Assigned by the store on insertion, or carried over from the remote
    /// side when mirroring a remote login. Monotonically increasing per store.
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
    /// Stamped at insertion time, immutable afterwards.
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Build a record from a validated login request with an externally
    /// assigned identifier (the remote-success path).
    pub fn from_request(request: &LoginRequest, id: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            username: request.username.clone(),
            email: request.email.clone(),
            password: request.password.clone(),
            full_name: request.full_name.clone(),
            phone: request.phone.clone(),
            created_at,
        }
    }

    /// Name to show in a profile display: full name, falling back to the
    /// email local part.
    pub fn display_name(&self) -> &str {
        if !self.full_name.is_empty() {
            &self.full_name
        } else if !self.username.is_empty() {
            &self.username
        } else {
            &self.email
        }
    }
}
