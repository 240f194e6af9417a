use crate::LogLevel;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Optional log file, relative to the config directory. None = stderr.
    pub file: Option<String>,
}
