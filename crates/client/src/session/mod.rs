//! Session lifecycle client: login, registration, identity check.
//!
//! Calls `auth/login/`, `auth/register/` and `auth/me/` on the storefront
//! backend and normalizes their success and error shapes into a [`Session`]
//! or a typed [`AuthError`].
//!
//! The client performs no storage of its own: callers decide whether and
//! where to persist the returned session (see [`crate::store`]).
//!
//! # Example
//!
//! ```rust,ignore
//! use little_sprout_client::{ClientConfig, SessionClient};
//!
//! let client = SessionClient::new(&ClientConfig::from_env()?);
//! let session = client.login("alice", "hunter2").await?;
//! let profile = client.current_user(&session.token).await?;
//! ```

mod error;
mod types;

pub use error::AuthError;
pub use types::{Session, UserProfile};

use std::sync::Arc;

use reqwest::header;
use secrecy::SecretString;
use serde::Serialize;
use tracing::{debug, instrument};
use url::Url;

use little_sprout_core::Email;

use crate::config::ClientConfig;
use crate::http;
use types::AuthResponse;

/// Fallback message when a failed login carries no error body.
const LOGIN_FALLBACK: &str = "Login failed";

/// Fallback message when a failed registration carries no error body.
const REGISTER_FALLBACK: &str = "Registration failed";

/// Fixed message for failed identity checks.
///
/// The backend surfaces no structured detail on `auth/me/`; every
/// non-success status maps to this message.
const TOKEN_VALIDATION_FAILED: &str = "Token validation failed";

/// Client for the backend's session endpoints.
#[derive(Clone)]
pub struct SessionClient {
    inner: Arc<SessionClientInner>,
}

struct SessionClientInner {
    client: reqwest::Client,
    base_url: Url,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

impl SessionClient {
    /// Create a new session client.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            inner: Arc::new(SessionClientInner {
                client: http::build_client(),
                base_url: config.api_base_url.clone(),
            }),
        }
    }

    /// Log in with username and password.
    ///
    /// On success the returned [`Session`] carries the exact bearer token
    /// the backend issued, usable on every authorized call.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] with the server-supplied message (or
    /// "Login failed" when the response body has none) on any non-success
    /// status, and [`AuthError::Transport`] when no response arrived.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        self.authenticate("auth/login/", &LoginBody { username, password }, LOGIN_FALLBACK)
            .await
    }

    /// Register a new account.
    ///
    /// Same contract as [`login`](Self::login), with the fallback message
    /// "Registration failed".
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] on any non-success status and
    /// [`AuthError::Transport`] when no response arrived.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn register(
        &self,
        username: &str,
        email: &Email,
        password: &str,
    ) -> Result<Session, AuthError> {
        let body = RegisterBody {
            username,
            email: email.as_str(),
            password,
        };
        self.authenticate("auth/register/", &body, REGISTER_FALLBACK)
            .await
    }

    /// Validate a bearer token and fetch the user it identifies.
    ///
    /// # Errors
    ///
    /// Identity checks surface no structured error detail: any non-success
    /// status fails with [`AuthError::Rejected`] and the fixed message
    /// "Token validation failed". [`AuthError::Transport`] when no response
    /// arrived.
    #[instrument(skip(self, token))]
    pub async fn current_user(&self, token: &SecretString) -> Result<UserProfile, AuthError> {
        let url = format!("{}auth/me/", self.inner.base_url);
        let response = self
            .inner
            .client
            .get(url)
            .header(header::AUTHORIZATION, http::auth_header(token))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AuthError::Rejected {
                message: TOKEN_VALIDATION_FAILED.to_string(),
            });
        }

        Ok(response.json().await?)
    }

    /// POST credentials to an auth endpoint and normalize the response.
    async fn authenticate<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<Session, AuthError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.post(url).json(body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = http::error_body(response).await.message_or(fallback);
            debug!(%status, %message, "authentication rejected");
            return Err(AuthError::Rejected { message });
        }

        let auth: AuthResponse = response.json().await?;
        debug!(user_id = %auth.user.id, "authenticated");
        Ok(Session::from(auth))
    }
}
