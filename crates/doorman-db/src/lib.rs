pub mod error;
pub mod user_store;

pub use error::{DbError, Result};
pub use user_store::UserStore;
