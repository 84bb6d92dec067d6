//! Wishlist wire records and conversions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bookhive_core::{BookId, Email, WishlistEntry, WishlistEntryId};

use crate::error::ApiError;

/// A saved book as returned by `GET /wishlist?email=`.
#[derive(Debug, Clone, Deserialize)]
pub struct WishlistRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub book_id: String,
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl TryFrom<WishlistRecord> for WishlistEntry {
    type Error = ApiError;

    fn try_from(record: WishlistRecord) -> Result<Self, Self::Error> {
        let email = Email::parse(&record.email)
            .map_err(|e| ApiError::Data(format!("wishlist entry {}: {e}", record.id)))?;

        Ok(Self {
            id: WishlistEntryId::new(record.id),
            book_id: BookId::new(record.book_id),
            email,
            added_at: record.created_at,
        })
    }
}

/// Payload for `POST /wishlist`.
#[derive(Debug, Clone, Serialize)]
pub struct NewWishlistEntry {
    pub book_id: BookId,
    pub email: Email,
}
