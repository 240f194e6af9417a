//! Dual-write login orchestrator.
//!
//! One attempt walks: Validating → RemoteAttempt → {RemoteSucceeded |
//! RemoteFailed} → LocalFallback (RemoteFailed only) → {Committed | Failed}.
//!
//! After a remote success the local store is only a mirror; a mirror failure
//! is logged and ignored. After a remote failure the local store is
//! authoritative; a store failure there fails the whole attempt. On either
//! committed path the session is saved last.
//!
//! There is no lookup-by-email path: submitting an email that already exists
//! locally while the remote is down fails with the duplicate error. That
//! register-only behavior is preserved from the system this replaces.

use crate::{ClientResult, RemoteAuth, SessionState};

use doorman_core::{Credentials, LoginRequest, UserRecord};
use doorman_db::UserStore;

use chrono::Utc;
use log::{info, warn};

pub struct LoginFlow<'a> {
    remote: &'a RemoteAuth,
    store: &'a UserStore,
    session: &'a mut SessionState,
}

/// Which path committed the attempt. The presentation layer may choose to
/// render both the same way; the distinction is still recorded here and in
/// the logs.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    /// The remote write succeeded; the record carries the remote identifier.
    Remote(UserRecord),
    /// The remote write failed; the local store assigned the identifier.
    LocalFallback(UserRecord),
}

impl LoginOutcome {
    pub fn record(&self) -> &UserRecord {
        match self {
            LoginOutcome::Remote(record) | LoginOutcome::LocalFallback(record) => record,
        }
    }

    pub fn was_fallback(&self) -> bool {
        matches!(self, LoginOutcome::LocalFallback(_))
    }
}

impl<'a> LoginFlow<'a> {
    pub fn new(
        remote: &'a RemoteAuth,
        store: &'a UserStore,
        session: &'a mut SessionState,
    ) -> Self {
        Self {
            remote,
            store,
            session,
        }
    }

    /// Run a single login attempt to completion. No cancellation.
    pub async fn login(&mut self, credentials: Credentials) -> ClientResult<LoginOutcome> {
        let request = credentials.into_request()?;

        match self.remote.login(&request).await {
            Ok(response) if response.success => {
                // Canonical identifier comes from the remote side; a
                // millisecond timestamp stands in when it sent none.
                let id = response
                    .remote_id()
                    .unwrap_or_else(|| Utc::now().timestamp_millis());
                let record = UserRecord::from_request(&request, id, Utc::now());

                // Mirror is advisory once remote has committed.
                if let Err(e) = self.store.mirror_user(&record).await {
                    warn!("Local mirror after remote login failed: {}", e);
                }

                self.session.save(&record)?;
                info!("Login committed remotely for {}", record.email);
                Ok(LoginOutcome::Remote(record))
            }
            Ok(response) => {
                info!(
                    "Remote login rejected ({}), falling back to local store",
                    response.message.as_deref().unwrap_or("no message")
                );
                self.local_fallback(&request).await
            }
            Err(e) => {
                warn!("Remote login failed ({}), falling back to local store", e);
                self.local_fallback(&request).await
            }
        }
    }

    async fn local_fallback(&mut self, request: &LoginRequest) -> ClientResult<LoginOutcome> {
        // Authoritative write; a duplicate email here fails the attempt.
        let record = self.store.add_user(request).await?;
        self.session.save(&record)?;
        info!("Login committed via local fallback for {}", record.email);
        Ok(LoginOutcome::LocalFallback(record))
    }
}
