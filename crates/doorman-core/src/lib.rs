pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::credentials::Credentials;
pub use models::login_request::LoginRequest;
pub use models::user_record::UserRecord;

/// Sentinel stored when no phone number was supplied.
pub const PHONE_NOT_PROVIDED: &str = "Not provided";
