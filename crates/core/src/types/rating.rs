//! Normalized book rating.
//!
//! The backend stores ratings in two shapes: a bare number (`4.5`) or an
//! `{average, count}` object. Both collapse into [`Rating`] at the
//! data-access boundary so nothing downstream branches on the shape.

use serde::{Deserialize, Serialize};

/// A book's review rating, normalized to an average plus a review count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Rating {
    /// Average score, 0.0 when unrated or malformed.
    pub average: f64,
    /// Number of reviews behind the average; `None` when the backend only
    /// supplied a bare number.
    pub count: Option<u32>,
}

impl Rating {
    /// An absent or malformed rating.
    pub const NONE: Self = Self {
        average: 0.0,
        count: None,
    };

    /// Build a rating from a bare average score.
    ///
    /// Non-finite or negative scores degrade to zero.
    #[must_use]
    pub fn from_average(average: f64) -> Self {
        Self {
            average: sanitize(average),
            count: None,
        }
    }

    /// Build a rating from an `{average, count}` summary.
    #[must_use]
    pub fn from_summary(average: f64, count: u32) -> Self {
        Self {
            average: sanitize(average),
            count: Some(count),
        }
    }

    /// Whether the rating meets a minimum average score.
    #[must_use]
    pub fn meets(&self, minimum: f64) -> bool {
        self.average >= minimum
    }
}

fn sanitize(average: f64) -> f64 {
    if average.is_finite() && average >= 0.0 {
        average
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_average() {
        let rating = Rating::from_average(4.5);
        assert!((rating.average - 4.5).abs() < f64::EPSILON);
        assert_eq!(rating.count, None);
    }

    #[test]
    fn test_from_summary() {
        let rating = Rating::from_summary(3.9, 12);
        assert!((rating.average - 3.9).abs() < f64::EPSILON);
        assert_eq!(rating.count, Some(12));
    }

    #[test]
    fn test_malformed_degrades_to_zero() {
        assert_eq!(Rating::from_average(f64::NAN).average, 0.0);
        assert_eq!(Rating::from_average(-1.0).average, 0.0);
    }

    #[test]
    fn test_meets_minimum() {
        assert!(Rating::from_average(4.5).meets(4.0));
        assert!(!Rating::from_average(3.9).meets(4.0));
        // minimum of zero accepts everything, including the degraded rating
        assert!(Rating::NONE.meets(0.0));
    }
}
