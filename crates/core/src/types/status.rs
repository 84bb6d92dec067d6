//! Order status enums.
//!
//! Orders track payment and shipping on independent lifecycles. Older
//! backend records carry only a single legacy `status` string; those are
//! reconciled into the split representation by [`reconcile_order_status`]
//! so the duplication never leaks past the data-access boundary.

use serde::{Deserialize, Serialize};

/// Payment lifecycle of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Refunded,
}

/// Shipping lifecycle of an order.
///
/// `Delivered` and `Cancelled` are terminal; librarian/admin tooling must
/// not move an order out of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShippingStatus {
    #[default]
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl ShippingStatus {
    /// Whether the order has reached a terminal shipping state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Paid => write!(f, "paid"),
            Self::Refunded => write!(f, "refunded"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "refunded" => Ok(Self::Refunded),
            _ => Err(format!("invalid payment status: {s}")),
        }
    }
}

impl std::fmt::Display for ShippingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Processing => write!(f, "processing"),
            Self::Shipped => write!(f, "shipped"),
            Self::Delivered => write!(f, "delivered"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for ShippingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid shipping status: {s}")),
        }
    }
}

/// Reconcile the split status fields with the legacy single `status` field.
///
/// The split fields win when present. Otherwise the legacy string is mapped:
/// `paid` implies payment completed, `delivered`/`cancelled` map to their
/// terminal shipping states, and anything else (including absence) falls
/// back to the defaults.
#[must_use]
pub fn reconcile_order_status(
    payment: Option<PaymentStatus>,
    shipping: Option<ShippingStatus>,
    legacy: Option<&str>,
) -> (PaymentStatus, ShippingStatus) {
    if let (Some(payment), Some(shipping)) = (payment, shipping) {
        return (payment, shipping);
    }

    let (legacy_payment, legacy_shipping) = match legacy {
        Some("paid") => (PaymentStatus::Paid, ShippingStatus::Processing),
        Some("shipped") => (PaymentStatus::Paid, ShippingStatus::Shipped),
        Some("delivered") => (PaymentStatus::Paid, ShippingStatus::Delivered),
        Some("cancelled") => (PaymentStatus::Pending, ShippingStatus::Cancelled),
        _ => (PaymentStatus::Pending, ShippingStatus::Processing),
    };

    (
        payment.unwrap_or(legacy_payment),
        shipping.unwrap_or(legacy_shipping),
    )
}
