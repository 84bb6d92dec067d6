//! Book wire records and conversions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bookhive_core::{Book, BookId, Price, Rating};

/// The backend's heterogeneous price field: a JSON number, a
/// currency-formatted string, or (for a few legacy records) junk.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    /// A plain JSON number (or a numeric string, which `Decimal` accepts).
    Amount(Decimal),
    /// A currency-formatted string such as `"$1,200.50"`.
    Text(String),
    /// Anything else; degrades to zero.
    Other(serde_json::Value),
}

impl RawPrice {
    /// Collapse into a normalized [`Price`].
    #[must_use]
    pub fn normalize(&self) -> Price {
        match self {
            Self::Amount(amount) => Price::new(*amount),
            Self::Text(text) => Price::parse_lenient(text),
            Self::Other(_) => Price::ZERO,
        }
    }
}

/// The backend's heterogeneous rating field: a bare average or an
/// `{average, count}` summary.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawRating {
    /// An `{average, count}` summary object.
    Summary { average: f64, count: u32 },
    /// A bare average score.
    Score(f64),
    /// Anything else; degrades to unrated.
    Other(serde_json::Value),
}

impl RawRating {
    /// Collapse into a normalized [`Rating`].
    #[must_use]
    pub fn normalize(&self) -> Rating {
        match self {
            Self::Summary { average, count } => Rating::from_summary(*average, *count),
            Self::Score(average) => Rating::from_average(*average),
            Self::Other(_) => Rating::NONE,
        }
    }
}

/// A book as returned by `GET /books` and `GET /book/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct BookRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub category: String,
    pub price: Option<RawPrice>,
    pub rating: Option<RawRating>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub description: String,
    pub image_url: Option<String>,
    pub delivery_estimate: Option<String>,
}

impl From<BookRecord> for Book {
    fn from(record: BookRecord) -> Self {
        Self {
            id: BookId::new(record.id),
            title: record.title,
            author: record.author,
            category: record.category,
            price: record.price.as_ref().map_or(Price::ZERO, RawPrice::normalize),
            rating: record
                .rating
                .as_ref()
                .map_or(Rating::NONE, RawRating::normalize),
            stock: record.stock,
            description: record.description,
            image_url: record.image_url,
            delivery_estimate: record.delivery_estimate,
        }
    }
}

/// Payload for `POST /book` (librarian/admin only).
#[derive(Debug, Clone, Serialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub category: String,
    pub price: Decimal,
    pub stock: u32,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_estimate: Option<String>,
}

/// Partial update for `PATCH /book/{id}` (librarian/admin only).
#[derive(Debug, Clone, Serialize, Default)]
pub struct BookPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Payload for `PATCH /book/stock/{id}` (librarian/admin only).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StockUpdate {
    pub stock: u32,
}
