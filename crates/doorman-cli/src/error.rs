use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Client(#[from] doorman_client::ClientError),

    #[error(transparent)]
    Store(#[from] doorman_db::DbError),

    #[error(transparent)]
    Config(#[from] doorman_config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("{message}")]
    Usage { message: String },
}
