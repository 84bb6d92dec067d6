//! Command implementations.

pub mod books;
pub mod dashboard;
pub mod orders;
pub mod settings;
pub mod wishlist;

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

use bookhive_client::{
    ApiClient, ApiError, ClientConfig, ConfigError, JsonFileBackend, Settings, SettingsError,
};
use bookhive_core::EmailError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Build a backend client from the environment.
///
/// Reads `BOOKHIVE_API_URL` (required) and attaches `BOOKHIVE_TOKEN` as the
/// bearer token when present.
pub fn client() -> Result<ApiClient, CliError> {
    let config = ClientConfig::from_env()?;
    let client = ApiClient::new(&config);

    if let Ok(token) = std::env::var("BOOKHIVE_TOKEN") {
        client.set_token(SecretString::from(token));
    }

    Ok(client)
}

/// The local settings store.
///
/// `BOOKHIVE_SETTINGS_PATH` overrides the location; otherwise the file lives
/// at `~/.bookhive.json`, falling back to the working directory.
pub fn settings() -> Settings<JsonFileBackend> {
    let path = std::env::var("BOOKHIVE_SETTINGS_PATH").map_or_else(
        |_| {
            std::env::var("HOME").map_or_else(
                |_| PathBuf::from(".bookhive.json"),
                |home| PathBuf::from(home).join(".bookhive.json"),
            )
        },
        PathBuf::from,
    );

    Settings::new(JsonFileBackend::new(path))
}
