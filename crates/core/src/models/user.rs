//! User domain type.
//!
//! Authentication is owned by the external identity provider; this profile
//! mirror exists for authorization and display data.

use chrono::{DateTime, Utc};

use crate::types::{Email, Role, UserId};

/// An account profile.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: Email,
    /// Authorization role; unknown backend values default to `User`.
    pub role: Role,
    /// Profile image URL.
    pub photo_url: Option<String>,
    /// When the account was mirrored into the backend.
    pub created_at: Option<DateTime<Utc>>,
    /// When the profile was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}
