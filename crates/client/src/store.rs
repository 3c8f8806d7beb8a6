//! Client-held session storage.
//!
//! The store is the host application's single session slot: the guard reads
//! it through [`SessionProvider`], views write it after login/registration
//! and clear it on logout. Optionally backed by a JSON state file so a
//! session survives process restarts, the way the original web client kept
//! it in browser localStorage.

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use little_sprout_core::{Email, UserId};

use crate::guard::SessionProvider;
use crate::session::Session;

/// On-disk session state.
///
/// The bearer token is written in the clear, matching the original client's
/// localStorage behavior.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    user_id: UserId,
    username: String,
    email: Email,
    is_admin: bool,
    token: String,
}

impl From<&Session> for PersistedSession {
    fn from(session: &Session) -> Self {
        Self {
            user_id: session.user_id,
            username: session.username.clone(),
            email: session.email.clone(),
            is_admin: session.is_admin,
            token: session.token.expose_secret().to_owned(),
        }
    }
}

impl From<PersistedSession> for Session {
    fn from(state: PersistedSession) -> Self {
        Self {
            user_id: state.user_id,
            username: state.username,
            email: state.email,
            is_admin: state.is_admin,
            token: SecretString::from(state.token),
        }
    }
}

/// Host-app session slot.
///
/// Holds the whole [`Session`] or nothing; there is no partial state.
pub struct SessionStore {
    slot: RwLock<Option<Session>>,
    state_path: Option<PathBuf>,
}

impl SessionStore {
    /// Create a store with no persistence.
    #[must_use]
    pub const fn in_memory() -> Self {
        Self {
            slot: RwLock::new(None),
            state_path: None,
        }
    }

    /// Create a store backed by a JSON state file, re-hydrating any session
    /// a previous run persisted there.
    ///
    /// An unreadable or corrupt state file hydrates as "no session" rather
    /// than failing; the next `store` overwrites it.
    #[must_use]
    pub fn persistent(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let slot = RwLock::new(load_state(&path));
        Self {
            slot,
            state_path: Some(path),
        }
    }

    /// Replace the stored session.
    ///
    /// Writes through to the state file when one is configured; a write
    /// failure keeps the in-memory session and logs a warning.
    pub fn store(&self, session: Session) {
        if let Some(path) = &self.state_path {
            write_state(path, &session);
        }
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    /// Drop the stored session (logout).
    pub fn clear(&self) {
        if let Some(path) = &self.state_path {
            remove_state(path);
        }
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// The current session, if any.
    #[must_use]
    pub fn get(&self) -> Option<Session> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SessionProvider for SessionStore {
    fn session(&self) -> Option<Session> {
        self.get()
    }
}

/// Read and decode the state file; any failure hydrates as no session.
fn load_state(path: &Path) -> Option<Session> {
    let raw = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str::<PersistedSession>(&raw) {
        Ok(state) => {
            debug!(username = %state.username, "session re-hydrated from state file");
            Some(Session::from(state))
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring corrupt session state file");
            None
        }
    }
}

/// Best-effort write-through of the session to the state file.
fn write_state(path: &Path, session: &Session) {
    let state = PersistedSession::from(session);
    let result = serde_json::to_string_pretty(&state)
        .map_err(std::io::Error::other)
        .and_then(|json| std::fs::write(path, json));
    if let Err(e) = result {
        warn!(path = %path.display(), error = %e, "failed to persist session state");
    }
}

/// Best-effort removal of the state file.
fn remove_state(path: &Path) {
    if let Err(e) = std::fs::remove_file(path)
        && e.kind() != std::io::ErrorKind::NotFound
    {
        warn!(path = %path.display(), error = %e, "failed to remove session state");
    }
}
