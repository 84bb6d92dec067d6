//! Bookhive Core - Shared types library.
//!
//! This crate provides common types used across all Bookhive components:
//! - `catalog` - In-memory catalog filter/sort/paginate pipeline
//! - `client` - REST client for the book platform backend
//! - `cli` - Command-line catalog browser and account tools
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, ratings,
//!   emails, statuses, and roles
//! - [`models`] - Normalized domain models (books, orders, users, ...)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
