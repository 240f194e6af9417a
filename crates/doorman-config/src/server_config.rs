use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOGIN_PATH, DEFAULT_SERVER_URL};

use serde::Deserialize;

/// Where the best-effort remote login endpoint lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the remote server
    pub url: String,
    /// Path the login POST is sent to
    pub login_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_SERVER_URL),
            login_path: String::from(DEFAULT_LOGIN_PATH),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ConfigError::config(format!(
                "server.url must start with http:// or https://, got {:?}",
                self.url
            )));
        }

        if !self.login_path.starts_with('/') {
            return Err(ConfigError::config(format!(
                "server.login_path must start with '/', got {:?}",
                self.login_path
            )));
        }

        Ok(())
    }
}
