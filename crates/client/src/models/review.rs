//! Review wire records and conversions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bookhive_core::{BookId, Email, Review, ReviewId};

use crate::error::ApiError;

/// A review as returned by `GET /reviews?bookId=`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub book_id: String,
    pub email: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub comment: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl TryFrom<ReviewRecord> for Review {
    type Error = ApiError;

    fn try_from(record: ReviewRecord) -> Result<Self, Self::Error> {
        let email = Email::parse(&record.email)
            .map_err(|e| ApiError::Data(format!("review {}: {e}", record.id)))?;

        Ok(Self {
            id: ReviewId::new(record.id),
            book_id: BookId::new(record.book_id),
            email,
            score: record.rating,
            comment: record.comment,
            submitted_at: record.created_at,
        })
    }
}

/// Payload for `POST /review`.
#[derive(Debug, Clone, Serialize)]
pub struct NewReview {
    pub book_id: BookId,
    pub email: Email,
    pub rating: f64,
    pub comment: String,
}
