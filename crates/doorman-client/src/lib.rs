pub mod error;
pub mod login;
pub mod remote;
pub mod session;

pub use error::{ClientError, ClientResult};
pub use login::{LoginFlow, LoginOutcome};
pub use remote::{RemoteAuth, RemoteLogin};
pub use session::SessionState;
