//! Session and user types.

use secrecy::SecretString;
use serde::Deserialize;

use little_sprout_core::{Email, UserId};

/// Backend user record.
///
/// The backend flags privileged accounts with the `is_staff` wire field; it
/// surfaces here as `is_admin`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    /// User's backend ID.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Contact address.
    pub email: Email,
    /// Whether the account may use admin-scoped endpoints.
    #[serde(rename = "is_staff")]
    pub is_admin: bool,
}

/// Client-held record of an authenticated user and their bearer credential.
///
/// A session is either fully present or entirely absent; no field is ever
/// populated without the others. The token is redacted in `Debug` output.
#[derive(Debug, Clone)]
pub struct Session {
    /// User's backend ID.
    pub user_id: UserId,
    /// Login name.
    pub username: String,
    /// Contact address.
    pub email: Email,
    /// Whether the session may use admin-scoped endpoints.
    pub is_admin: bool,
    /// Opaque bearer credential issued by the backend at login or
    /// registration.
    pub token: SecretString,
}

/// Successful login/registration payload: the issued token plus the embedded
/// user record.
#[derive(Debug, Deserialize)]
pub(crate) struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Self {
            user_id: response.user.id,
            username: response.user.username,
            email: response.user.email,
            is_admin: response.user.is_admin,
            token: SecretString::from(response.token),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_user_profile_wire_shape() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"id": 3, "username": "alice", "email": "alice@example.com", "is_staff": true}"#,
        )
        .unwrap();
        assert_eq!(profile.id, UserId::new(3));
        assert_eq!(profile.username, "alice");
        assert!(profile.is_admin);
    }

    #[test]
    fn test_session_from_auth_response() {
        let response: AuthResponse = serde_json::from_str(
            r#"{
                "token": "tok-abc",
                "user": {"id": 1, "username": "bob", "email": "bob@example.com", "is_staff": false}
            }"#,
        )
        .unwrap();
        let session = Session::from(response);
        assert_eq!(session.user_id, UserId::new(1));
        assert!(!session.is_admin);
        assert_eq!(session.token.expose_secret(), "tok-abc");
    }

    #[test]
    fn test_session_debug_redacts_token() {
        let session = Session {
            user_id: UserId::new(1),
            username: "bob".to_string(),
            email: Email::parse("bob@example.com").unwrap(),
            is_admin: false,
            token: SecretString::from("tok-secret"),
        };
        let debug = format!("{session:?}");
        assert!(!debug.contains("tok-secret"));
    }
}
