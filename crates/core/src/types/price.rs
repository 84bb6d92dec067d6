//! Type-safe price representation using decimal arithmetic.
//!
//! The backend stores book prices inconsistently: some records carry a JSON
//! number, others a currency-formatted string such as `"$1,200.50"`. All of
//! that is normalized into a [`Price`] exactly once, at the data-access
//! boundary; malformed input degrades to zero rather than failing.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A normalized price in the store currency.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// The zero price, used as the degraded value for malformed input.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Normalize a currency-formatted string into a price.
    ///
    /// Currency symbols, thousands separators, and surrounding whitespace
    /// are stripped before parsing, so `"$1,200.50"` becomes `1200.50`.
    /// Anything that still fails to parse becomes [`Price::ZERO`].
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();

        Decimal::from_str(&cleaned).map_or(Self::ZERO, Self)
    }

    /// Whether the price is zero (either genuinely free or degraded).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0.round_dp(2))
    }
}
