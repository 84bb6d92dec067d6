//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `BOOKHIVE_API_URL` - Base URL of the book platform backend
//!
//! ## Optional
//! - `BOOKHIVE_UPLOAD_KEY` - API key for the image-hosting upload endpoint

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
///
/// Implements `Debug` manually to redact the upload key.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the backend, without a trailing slash.
    pub api_url: String,
    /// Image-hosting upload key, passed through to the upload endpoint.
    pub upload_key: Option<SecretString>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field(
                "upload_key",
                &self.upload_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `BOOKHIVE_API_URL` is missing or malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = get_required_env("BOOKHIVE_API_URL")?;
        let api_url = validate_api_url(&api_url)?;
        let upload_key = get_optional_env("BOOKHIVE_UPLOAD_KEY").map(SecretString::from);

        Ok(Self {
            api_url,
            upload_key,
        })
    }

    /// Build a config directly, for tests and embedding.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the URL is not http(s) or is empty.
    pub fn new(api_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: validate_api_url(api_url)?,
            upload_key: None,
        })
    }
}

fn validate_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            "BOOKHIVE_API_URL".to_owned(),
            "empty URL".to_owned(),
        ));
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(ConfigError::InvalidEnvVar(
            "BOOKHIVE_API_URL".to_owned(),
            format!("expected an http(s) URL, got {trimmed}"),
        ));
    }
    Ok(trimmed.to_owned())
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
