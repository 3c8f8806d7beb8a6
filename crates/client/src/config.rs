//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_API_URL` - Base URL of the storefront REST API
//!   (default: `http://localhost:8000/api/`)

use thiserror::Error;
use url::Url;

/// Default API base URL for local development.
const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/";

/// Environment variable overriding the API base URL.
const API_URL_VAR: &str = "STOREFRONT_API_URL";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront client configuration.
///
/// Resolved once during process initialization and shared by every API
/// client for the process lifetime.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the storefront REST API.
    ///
    /// Always carries a trailing slash; endpoint paths are appended directly
    /// to it (`{base}auth/login/`).
    pub api_base_url: Url,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present. Falls
    /// back to the local-development default when no override is set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the override is not a valid absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let raw = std::env::var(API_URL_VAR).ok();
        let api_base_url = resolve_base_url(raw.as_deref())?;
        Ok(Self { api_base_url })
    }

    /// Build a configuration pointing at an explicit base URL.
    ///
    /// The trailing-slash invariant is enforced here too.
    #[must_use]
    pub fn with_base_url(url: Url) -> Self {
        Self {
            api_base_url: ensure_trailing_slash(url),
        }
    }
}

/// Resolve the base URL from an optional override, else the fixed default.
fn resolve_base_url(raw: Option<&str>) -> Result<Url, ConfigError> {
    let raw = raw.unwrap_or(DEFAULT_API_BASE_URL);
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar(API_URL_VAR.to_string(), e.to_string()))?;
    Ok(ensure_trailing_slash(url))
}

/// Append a trailing slash to the URL path if it lacks one.
///
/// Endpoint paths are joined by string concatenation, so the invariant must
/// hold no matter what the environment supplied.
fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let url = resolve_base_url(None).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/");
    }

    #[test]
    fn test_override_wins() {
        let url = resolve_base_url(Some("https://shop.example.com/api/")).unwrap();
        assert_eq!(url.as_str(), "https://shop.example.com/api/");
    }

    #[test]
    fn test_trailing_slash_enforced() {
        let url = resolve_base_url(Some("https://shop.example.com/api")).unwrap();
        assert_eq!(url.as_str(), "https://shop.example.com/api/");
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = resolve_base_url(Some("not a url"));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_with_base_url_normalizes() {
        let config =
            ClientConfig::with_base_url(Url::parse("http://127.0.0.1:9999/api").unwrap());
        assert!(config.api_base_url.as_str().ends_with('/'));
    }
}
