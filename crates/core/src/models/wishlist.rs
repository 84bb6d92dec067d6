//! Wishlist domain type.

use chrono::{DateTime, Utc};

use crate::types::{BookId, Email, WishlistEntryId};

/// A saved book: a User/Book join owned by the shopper.
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistEntry {
    pub id: WishlistEntryId,
    pub book_id: BookId,
    pub email: Email,
    pub added_at: Option<DateTime<Utc>>,
}
