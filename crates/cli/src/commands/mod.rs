//! CLI command implementations.

pub mod auth;
pub mod catalog;
pub mod orders;

use thiserror::Error;

use little_sprout_client::{
    AuthError, CatalogError, ConfigError, OrderError, Session, SessionStore,
};
use little_sprout_core::EmailError;

/// Default session state file, next to wherever the CLI runs.
const DEFAULT_SESSION_FILE: &str = ".sprout-session.json";

/// Environment variable overriding the session state file.
const SESSION_FILE_VAR: &str = "SPROUT_SESSION_FILE";

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A session operation failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// An order operation failed.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// A catalog read failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The supplied email address is invalid.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The command needs a session and none is stored.
    #[error("Not logged in. Run `sprout-cli auth login` first.")]
    NotLoggedIn,
}

/// Open the persistent session store the CLI shares between invocations.
pub(crate) fn session_store() -> SessionStore {
    let path =
        std::env::var(SESSION_FILE_VAR).unwrap_or_else(|_| DEFAULT_SESSION_FILE.to_string());
    SessionStore::persistent(path)
}

/// The stored session, or a "log in first" error.
pub(crate) fn require_session(store: &SessionStore) -> Result<Session, CliError> {
    store.get().ok_or(CliError::NotLoggedIn)
}
