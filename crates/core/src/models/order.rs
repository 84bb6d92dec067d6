//! Order domain type.

use chrono::{DateTime, Utc};

use crate::types::{BookId, Email, OrderId, PaymentStatus, Price, ShippingStatus};

/// A purchase request for a single book.
///
/// Payment and shipping progress on independent tracks; the backend's
/// legacy single `status` field is reconciled away during conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// The ordered book.
    pub book_id: BookId,
    /// The purchasing account.
    pub email: Email,
    /// Ordered quantity.
    pub quantity: u32,
    /// Computed total at checkout time.
    pub total: Price,
    /// Payment lifecycle state.
    pub payment_status: PaymentStatus,
    /// Shipping lifecycle state.
    pub shipping_status: ShippingStatus,
    /// When the order was placed, if the backend recorded it.
    pub placed_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Whether the order has reached a terminal state.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.shipping_status.is_terminal()
    }
}
