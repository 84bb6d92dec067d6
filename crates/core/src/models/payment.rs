//! Payment/invoice domain type.

use chrono::{DateTime, Utc};

use crate::types::{Email, PaymentId, Price};

/// A settled payment, as reported by the payment provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: PaymentId,
    pub email: Email,
    /// Provider-issued transaction ID.
    pub transaction_id: String,
    pub amount: Price,
    pub paid_at: Option<DateTime<Utc>>,
}
