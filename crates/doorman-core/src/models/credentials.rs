//! Raw login form input, before validation and defaulting.

use crate::{CoreError, LoginRequest, PHONE_NOT_PROVIDED, Result};

/// What the login form hands over. Email and password are required; the rest
/// is filled in from defaults when blank.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            full_name: None,
            phone: None,
        }
    }

    /// Validate and normalize into the wire/store shape.
    ///
    /// Defaults: `full_name` and `username` fall back to the email local
    /// part, `phone` falls back to the "Not provided" sentinel.
    pub fn into_request(self) -> Result<LoginRequest> {
        let email = self.email.trim().to_string();
        let password = self.password;

        if email.is_empty() {
            return Err(CoreError::validation("email is required"));
        }
        if password.is_empty() {
            return Err(CoreError::validation("password is required"));
        }

        let local_part = email.split('@').next().unwrap_or(&email).to_string();

        let full_name = match self.full_name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => local_part.clone(),
        };
        let phone = match self.phone {
            Some(phone) if !phone.trim().is_empty() => phone.trim().to_string(),
            _ => String::from(PHONE_NOT_PROVIDED),
        };

        Ok(LoginRequest {
            email,
            password,
            full_name,
            phone,
            username: local_part,
        })
    }
}
