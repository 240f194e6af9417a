use crate::{ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, ServerConfig};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. Resolve the config directory (`DOORMAN_CONFIG_DIR` env var, else
    ///    `~/.doorman/`), creating it if absent
    /// 2. Load `config.toml` if it exists, else use defaults
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        if config_path.exists() {
            Self::load_toml(&config_path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load and parse a TOML file with detailed error context.
    pub fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: DOORMAN_CONFIG_DIR env var > ~/.doorman/
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("DOORMAN_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".doorman"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;

        // Store file stays inside the config dir
        let db_path = Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::config(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to the store file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get absolute path to the log file, if one is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => {
                let config_dir = Self::config_dir()?;
                Ok(Some(config_dir.join(file)))
            }
            None => Ok(None),
        }
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}{}", self.server.url, self.server.login_path);
        info!("  database: {}", self.database.path);
        info!("  logging: level={:?}", self.logging.level.0);
    }
}
