//! Display-time currency conversion.
//!
//! Aging and statement arithmetic is carried at full precision; rounding
//! happens only when a figure is converted for output. Banker's rounding
//! (round half to even) keeps cumulative display error minimal.

use rust_decimal::{Decimal, RoundingStrategy};

/// Converts an amount using the given exchange rate and rounds it to the
/// currency's decimal places for display.
///
/// Uses banker's rounding (round half to even).
#[must_use]
pub fn convert_amount(amount: Decimal, rate: Decimal, decimal_places: u32) -> Decimal {
    let converted = amount * rate;
    converted.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}
