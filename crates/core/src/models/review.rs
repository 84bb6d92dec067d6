//! Review domain type.

use chrono::{DateTime, Utc};

use crate::types::{BookId, Email, ReviewId};

/// A reader review: a User/Book join with a score and a comment.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub book_id: BookId,
    pub email: Email,
    /// Score out of 5.
    pub score: f64,
    pub comment: String,
    pub submitted_at: Option<DateTime<Utc>>,
}
