//! Durable session storage.
//!
//! Two keys under the config directory, matching the lifecycle the session
//! contract requires:
//!
//! - `session.json` — the serialized current-user record
//! - `logged_in`    — a boolean flag ("true" when a session exists)
//!
//! ## Self-healing
//!
//! A stored record that no longer parses is treated as "logged out": `read()`
//! erases both keys and returns `None` instead of failing. A fresh page load
//! must never be blocked by a corrupt leftover session.

use crate::{Config, ConfigError, ConfigErrorResult};

use doorman_core::UserRecord;

use std::path::{Path, PathBuf};

const SESSION_FILENAME: &str = "session.json";
const FLAG_FILENAME: &str = "logged_in";

/// Handle on the durable session keys in one directory.
#[derive(Debug, Clone)]
pub struct SessionFile {
    dir: PathBuf,
}

impl SessionFile {
    /// Session storage in an explicit directory (tests, embedding).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Session storage in the standard config directory.
    pub fn in_config_dir() -> ConfigErrorResult<Self> {
        Ok(Self::new(Config::config_dir()?))
    }

    pub fn record_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILENAME)
    }

    pub fn flag_path(&self) -> PathBuf {
        self.dir.join(FLAG_FILENAME)
    }

    /// Persist a record as the current session and raise the logged-in flag.
    pub fn write(&self, record: &UserRecord) -> ConfigErrorResult<()> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir).map_err(|e| ConfigError::Io {
                path: self.dir.clone(),
                source: e,
            })?;
        }

        let content = serde_json::to_string_pretty(record)
            .map_err(|e| ConfigError::session(format!("Failed to serialize session: {e}")))?;

        Self::write_file(&self.record_path(), &content)?;
        Self::write_file(&self.flag_path(), "true")?;

        Ok(())
    }

    /// Read the stored session, if any.
    ///
    /// Returns `Ok(None)` when:
    /// - the logged-in flag is absent or not "true"
    /// - no record file exists
    /// - the record file exists but does not parse (both keys are erased
    ///   as a side effect)
    pub fn read(&self) -> ConfigErrorResult<Option<UserRecord>> {
        let flag_path = self.flag_path();
        if !flag_path.exists() {
            return Ok(None);
        }

        let flag = std::fs::read_to_string(&flag_path).map_err(|e| ConfigError::Io {
            path: flag_path,
            source: e,
        })?;
        if flag.trim() != "true" {
            return Ok(None);
        }

        let record_path = self.record_path();
        if !record_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&record_path).map_err(|e| ConfigError::Io {
            path: record_path.clone(),
            source: e,
        })?;

        match serde_json::from_str::<UserRecord>(&content) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                log::error!(
                    "Discarding unparseable session data in {}: {}",
                    record_path.display(),
                    e
                );
                self.remove()?;
                Ok(None)
            }
        }
    }

    /// Erase both keys. Silently succeeds when they do not exist.
    pub fn remove(&self) -> ConfigErrorResult<()> {
        Self::remove_file(&self.record_path())?;
        Self::remove_file(&self.flag_path())?;
        Ok(())
    }

    fn write_file(path: &Path, content: &str) -> ConfigErrorResult<()> {
        std::fs::write(path, content).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn remove_file(path: &Path) -> ConfigErrorResult<()> {
        if path.exists() {
            std::fs::remove_file(path).map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
        Ok(())
    }
}
