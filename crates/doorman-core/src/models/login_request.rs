//! Validated login payload - the shape sent to the remote endpoint and
//! inserted into the local store.

use serde::{Deserialize, Serialize};

/// Produced by [`crate::Credentials::into_request`]; all fields are
/// guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub phone: String,
    pub username: String,
}
