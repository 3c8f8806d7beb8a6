//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during session operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend rejected the request with a non-success status.
    ///
    /// Carries the server-supplied error message when the response body had
    /// one, otherwise the operation's documented fallback message.
    #[error("{message}")]
    Rejected {
        /// Human-readable failure reason.
        message: String,
    },

    /// Network or protocol failure before a usable response arrived.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl AuthError {
    /// The rejection message, if the backend rejected the request.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message } => Some(message),
            Self::Transport(_) => None,
        }
    }
}
