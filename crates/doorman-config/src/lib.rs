mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod session;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use session::SessionFile;

const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
const DEFAULT_LOGIN_PATH: &str = "/api/login";
const DEFAULT_DATABASE_FILENAME: &str = "users.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

#[cfg(test)]
mod tests;
