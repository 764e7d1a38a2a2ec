//! Aging error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during aging aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgingError {
    /// Thresholds are not positive and strictly ordered.
    #[error("Invalid aging thresholds: t1 {t1} must be positive and less than t2 {t2}")]
    InvalidThresholds {
        /// First bucket boundary in days.
        t1: i64,
        /// Second bucket boundary in days.
        t2: i64,
    },

    /// Exchange rate is negative.
    #[error("Negative exchange rate: {0}")]
    NegativeRate(Decimal),
}
