//! Session commands: login, register, identity check, logout.
//!
//! # Usage
//!
//! ```bash
//! sprout-cli auth login -u alice -p hunter2
//! sprout-cli auth register -u alice -e alice@example.com -p hunter2
//! sprout-cli auth me
//! sprout-cli auth logout
//! ```

use little_sprout_client::{ClientConfig, SessionClient};
use little_sprout_core::Email;

use super::{CliError, require_session, session_store};

/// Log in and persist the session for later commands.
pub async fn login(username: &str, password: &str) -> Result<(), CliError> {
    let config = ClientConfig::from_env()?;
    let client = SessionClient::new(&config);

    let session = client.login(username, password).await?;

    tracing::info!("Logged in as {} <{}>", session.username, session.email);
    if session.is_admin {
        tracing::info!("This account has admin privileges");
    }

    session_store().store(session);
    Ok(())
}

/// Register a new account and persist the resulting session.
pub async fn register(username: &str, email: &str, password: &str) -> Result<(), CliError> {
    let email = Email::parse(email)?;

    let config = ClientConfig::from_env()?;
    let client = SessionClient::new(&config);

    let session = client.register(username, &email, password).await?;

    tracing::info!("Registered {} <{}>", session.username, session.email);
    session_store().store(session);
    Ok(())
}

/// Validate the stored token against the backend and show who it belongs to.
pub async fn me() -> Result<(), CliError> {
    let store = session_store();
    let session = require_session(&store)?;

    let config = ClientConfig::from_env()?;
    let client = SessionClient::new(&config);

    let profile = client.current_user(&session.token).await?;

    tracing::info!("Logged in as:");
    tracing::info!("  Username: {}", profile.username);
    tracing::info!("  Email: {}", profile.email);
    tracing::info!("  Admin: {}", profile.is_admin);
    Ok(())
}

/// Drop the stored session.
pub fn logout() {
    session_store().clear();
    tracing::info!("Logged out");
}
