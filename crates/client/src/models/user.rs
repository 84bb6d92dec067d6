//! User wire records and conversions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bookhive_core::{Email, Role, User, UserId};

use crate::error::ApiError;

/// An account as returned by `GET /users` and `GET /user/email/{email}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    /// Flat role string; unknown values mean ordinary shopper.
    pub role: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<UserRecord> for User {
    type Error = ApiError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        let email = Email::parse(&record.email)
            .map_err(|e| ApiError::Data(format!("user {}: {e}", record.id)))?;

        Ok(Self {
            id: UserId::new(record.id),
            name: record.name,
            email,
            role: Role::from_str_lossy(record.role.as_deref()),
            photo_url: record.photo_url,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

/// Payload for `POST /user` - mirrors a freshly authenticated identity
/// provider account into the backend.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Partial update for `PATCH /user/{id}`.
///
/// Role changes are admin-only; profile fields are self-service.
#[derive(Debug, Clone, Serialize, Default)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}
