//! In-memory session state over the durable session file.
//!
//! Holds the cached "who is logged in" snapshot. The snapshot is a copy,
//! independent of the record store's authoritative data, and may be stale
//! relative to it. There is deliberately no global: whoever needs the
//! current user gets handed this value.

use crate::ClientResult;

use doorman_config::SessionFile;
use doorman_core::UserRecord;

pub struct SessionState {
    file: SessionFile,
    current: Option<UserRecord>,
}

impl SessionState {
    /// Load session state from durable storage (the page-load path).
    ///
    /// A missing or corrupt stored session means "logged out"; corruption is
    /// healed by the underlying file layer.
    pub fn load(file: SessionFile) -> ClientResult<Self> {
        let current = file.read()?;
        Ok(Self { file, current })
    }

    /// Set the current user and persist a serialized copy.
    pub fn save(&mut self, record: &UserRecord) -> ClientResult<()> {
        self.file.write(record)?;
        self.current = Some(record.clone());
        Ok(())
    }

    /// Unset the current user and erase the durable keys (logout).
    pub fn clear(&mut self) -> ClientResult<()> {
        self.file.remove()?;
        self.current = None;
        Ok(())
    }

    /// The in-memory snapshot. Possibly stale relative to the store.
    pub fn current(&self) -> Option<&UserRecord> {
        self.current.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }
}
