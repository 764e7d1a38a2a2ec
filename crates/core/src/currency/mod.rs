//! Exchange rates and display-time conversion.
//!
//! The aging and statement services take a single pre-resolved `Decimal` rate;
//! this module provides the rate-lookup seam callers resolve it from, plus the
//! rounding rule applied when figures are formatted for output.

pub mod conversion;
pub mod exchange;
pub mod rates;

pub use conversion::convert_amount;
pub use exchange::ExchangeRate;
pub use rates::{FixedRates, RateSource};
