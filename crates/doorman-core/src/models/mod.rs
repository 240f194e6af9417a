pub mod credentials;
pub mod login_request;
pub mod user_record;
