use std::panic::Location;

use doorman_config::ConfigError;
use doorman_core::CoreError;
use doorman_db::DbError;
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Remote login failed: {message} {location}")]
    Remote {
        message: String,
        location: ErrorLocation,
    },

    #[error("Store error: {source}")]
    Store {
        #[from]
        source: DbError,
    },

    #[error("Session error: {source}")]
    Session {
        #[from]
        source: ConfigError,
    },
}

impl ClientError {
    #[track_caller]
    pub fn remote<S: Into<String>>(message: S) -> Self {
        ClientError::Remote {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True when the attempt failed on the email uniqueness constraint.
    pub fn is_duplicate_email(&self) -> bool {
        matches!(
            self,
            ClientError::Store {
                source: DbError::DuplicateEmail { .. }
            }
        )
    }
}

impl From<CoreError> for ClientError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation { message, location } => {
                ClientError::Validation { message, location }
            }
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
