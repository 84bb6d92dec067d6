//! Book domain type.

use crate::types::{BookId, Price, Rating};

/// A catalog item.
///
/// Created and edited by librarian/admin accounts through the backend;
/// read-only to shoppers. Price and rating are already normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    /// Unique book ID.
    pub id: BookId,
    /// Title.
    pub title: String,
    /// Author display name.
    pub author: String,
    /// Single category label (e.g., "Sci-Fi").
    pub category: String,
    /// Normalized price.
    pub price: Price,
    /// Normalized review rating.
    pub rating: Rating,
    /// Units in stock.
    pub stock: u32,
    /// Long-form description.
    pub description: String,
    /// Cover image URL.
    pub image_url: Option<String>,
    /// Estimated delivery window, as supplied by the backend.
    pub delivery_estimate: Option<String>,
}

impl Book {
    /// Whether the book can currently be ordered.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
