//! Shared HTTP plumbing for the API clients.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Request timeout applied to every API call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the HTTP client backing an API client instance.
///
/// # Panics
///
/// Panics if the HTTP client cannot be created. This should never happen
/// under normal circumstances as we use standard TLS configuration.
pub(crate) fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Failed to create HTTP client")
}

/// `Authorization` header value for a bearer credential.
///
/// The backend uses the `Token` scheme, not `Bearer`.
pub(crate) fn auth_header(token: &SecretString) -> String {
    format!("Token {}", token.expose_secret())
}

/// Error payload shape shared by the backend's JSON error responses.
///
/// `order_id` only ever appears on order-creation failures, when the backend
/// recorded an order despite declining the payment.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
    pub order_id: Option<i32>,
}

impl ErrorBody {
    /// The server-supplied message, or the operation's documented fallback.
    pub fn message_or(self, fallback: &str) -> String {
        self.error.unwrap_or_else(|| fallback.to_owned())
    }
}

/// Decode the error payload of a non-success response.
///
/// Tolerates bodies that are not JSON or carry no `error` field; callers get
/// the documented fallback message in that case.
pub(crate) async fn error_body(response: reqwest::Response) -> ErrorBody {
    response.json().await.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header_uses_token_scheme() {
        let token = SecretString::from("abc123");
        assert_eq!(auth_header(&token), "Token abc123");
    }

    #[test]
    fn test_message_or_prefers_server_message() {
        let body = ErrorBody {
            error: Some("Invalid credentials".to_string()),
            order_id: None,
        };
        assert_eq!(body.message_or("Login failed"), "Invalid credentials");
    }

    #[test]
    fn test_message_or_falls_back() {
        assert_eq!(ErrorBody::default().message_or("Login failed"), "Login failed");
    }

    #[test]
    fn test_error_body_shape() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error": "Card declined", "order_id": 42}"#)
                .expect("decode error body");
        assert_eq!(body.error.as_deref(), Some("Card declined"));
        assert_eq!(body.order_id, Some(42));
    }
}
