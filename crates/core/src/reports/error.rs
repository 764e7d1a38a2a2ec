//! Report error types.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::aging::AgingError;

/// Errors that can occur during report assembly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// An account failed to age.
    #[error(transparent)]
    Aging(#[from] AgingError),

    /// Zero-suppression tolerance is negative.
    #[error("Negative zero-balance tolerance: {0}")]
    NegativeEpsilon(Decimal),
}
