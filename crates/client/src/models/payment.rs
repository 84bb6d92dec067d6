//! Payment wire records and conversions.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bookhive_core::{Email, Payment, PaymentId, Price};

use crate::error::ApiError;
use crate::models::book::RawPrice;

/// An invoice as returned by `GET /payments?email=`.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub transaction_id: String,
    pub amount: Option<RawPrice>,
    pub created_at: Option<DateTime<Utc>>,
}

impl TryFrom<PaymentRecord> for Payment {
    type Error = ApiError;

    fn try_from(record: PaymentRecord) -> Result<Self, Self::Error> {
        let email = Email::parse(&record.email)
            .map_err(|e| ApiError::Data(format!("payment {}: {e}", record.id)))?;

        Ok(Self {
            id: PaymentId::new(record.id),
            email,
            transaction_id: record.transaction_id,
            amount: record
                .amount
                .as_ref()
                .map_or(Price::ZERO, RawPrice::normalize),
            paid_at: record.created_at,
        })
    }
}

/// Payload for `POST /payment`, recorded after the provider settles.
#[derive(Debug, Clone, Serialize)]
pub struct NewPayment {
    pub email: Email,
    pub transaction_id: String,
    pub amount: Decimal,
}
