//! Order wire records and conversions.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bookhive_core::{
    Book, BookId, Email, Order, OrderId, PaymentStatus, Price, ShippingStatus,
    reconcile_order_status,
};

use crate::error::ApiError;
use crate::models::book::RawPrice;

/// An order as returned by `GET /orders`.
///
/// Newer records carry split `payment_status`/`shipping_status` fields;
/// older ones only the legacy `status` string. Some carry both, and they
/// can disagree - the split fields win.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub book_id: String,
    pub email: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub total: Option<RawPrice>,
    pub payment_status: Option<PaymentStatus>,
    pub shipping_status: Option<ShippingStatus>,
    /// Legacy single status field, still emitted by the backend.
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

const fn default_quantity() -> u32 {
    1
}

impl TryFrom<OrderRecord> for Order {
    type Error = ApiError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        let email = Email::parse(&record.email)
            .map_err(|e| ApiError::Data(format!("order {}: {e}", record.id)))?;

        let (payment_status, shipping_status) = reconcile_order_status(
            record.payment_status,
            record.shipping_status,
            record.status.as_deref(),
        );

        Ok(Self {
            id: OrderId::new(record.id),
            book_id: BookId::new(record.book_id),
            email,
            quantity: record.quantity,
            total: record.total.as_ref().map_or(Price::ZERO, RawPrice::normalize),
            payment_status,
            shipping_status,
            placed_at: record.created_at,
        })
    }
}

/// Payload for `POST /order`.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    pub book_id: BookId,
    pub email: Email,
    pub quantity: u32,
    pub total: Decimal,
}

impl NewOrder {
    /// Build a checkout payload for `quantity` copies of `book`.
    #[must_use]
    pub fn for_book(book: &Book, email: Email, quantity: u32) -> Self {
        Self {
            book_id: book.id.clone(),
            email,
            quantity,
            total: book.price.amount() * Decimal::from(quantity),
        }
    }
}

/// Partial update for `PATCH /order/{id}` (librarian/admin only).
#[derive(Debug, Clone, Copy, Serialize, Default)]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_status: Option<ShippingStatus>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fields_win() {
        let record: OrderRecord = serde_json::from_str(
            r#"{"_id":"o1","book_id":"b1","email":"reader@example.com","quantity":2,
                "total":"$40","payment_status":"paid","shipping_status":"shipped",
                "status":"cancelled"}"#,
        )
        .unwrap();

        let order = Order::try_from(record).unwrap();
        assert_eq!(order.payment_status, PaymentStatus::Paid);
        assert_eq!(order.shipping_status, ShippingStatus::Shipped);
        assert_eq!(order.total, Price::parse_lenient("$40"));
    }

    #[test]
    fn test_legacy_status_only() {
        let record: OrderRecord = serde_json::from_str(
            r#"{"_id":"o2","book_id":"b1","email":"reader@example.com",
                "total":20,"status":"delivered"}"#,
        )
        .unwrap();

        let order = Order::try_from(record).unwrap();
        assert_eq!(order.quantity, 1);
        assert_eq!(order.payment_status, PaymentStatus::Paid);
        assert_eq!(order.shipping_status, ShippingStatus::Delivered);
        assert!(order.is_closed());
    }

    #[test]
    fn test_invalid_email_is_a_data_error() {
        let record: OrderRecord = serde_json::from_str(
            r#"{"_id":"o3","book_id":"b1","email":"not-an-email","total":20}"#,
        )
        .unwrap();

        assert!(matches!(Order::try_from(record), Err(ApiError::Data(_))));
    }

    #[test]
    fn test_checkout_total_is_price_times_quantity() {
        let book = Book {
            id: BookId::new("b1"),
            title: "Dune".to_owned(),
            author: "Frank Herbert".to_owned(),
            category: "Sci-Fi".to_owned(),
            price: Price::parse_lenient("$20"),
            rating: bookhive_core::Rating::NONE,
            stock: 3,
            description: String::new(),
            image_url: None,
            delivery_estimate: None,
        };
        let email = Email::parse("reader@example.com").unwrap();

        let order = NewOrder::for_book(&book, email, 3);
        assert_eq!(order.total, Decimal::from(60));
    }
}
