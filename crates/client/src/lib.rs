//! Bookhive Client - REST client for the book platform backend.
//!
//! # Architecture
//!
//! - The backend is the source of truth - no local sync, direct API calls
//! - In-memory caching via `moka` for read responses (5 minute TTL);
//!   every successful mutation invalidates the affected entries
//! - Wire records mirror the backend's inconsistent shapes (number-or-string
//!   prices, number-or-object ratings, legacy order status) and are
//!   normalized into `bookhive-core` domain models exactly once
//!
//! # Example
//!
//! ```rust,ignore
//! use bookhive_client::{ApiClient, ClientConfig};
//!
//! let client = ApiClient::new(&ClientConfig::from_env()?);
//!
//! // Catalog reads are public
//! let books = client.get_books().await?;
//!
//! // Privileged calls carry the identity provider's bearer token
//! client.set_token(token);
//! client.update_stock(&book_id, 7).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod settings;

pub use api::ApiClient;
pub use config::{ClientConfig, ConfigError};
pub use dashboard::DashboardShell;
pub use error::ApiError;
pub use settings::{
    JsonFileBackend, MemoryBackend, RememberedLogin, Settings, SettingsBackend, SettingsError,
    Theme,
};
