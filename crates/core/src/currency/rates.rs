//! Rate lookup seam.
//!
//! Rates come from an external table keyed by currency and date. The aging
//! and statement services never fetch rates themselves; callers resolve one
//! multiplier per account through this trait and pass it down.

use std::collections::HashMap;

use chrono::NaiveDate;
use duebook_shared::types::Currency;
use rust_decimal::Decimal;

/// Source of exchange rates into the report's target currency.
pub trait RateSource {
    /// Multiplier converting one unit of `currency` into the target currency
    /// on the given date, or `None` if no rate is known.
    fn rate(&self, currency: Currency, on: NaiveDate) -> Option<Decimal>;
}

/// In-memory rate table with date-independent rates.
///
/// The home currency always resolves to 1. Intended for tests and embedded
/// use; production callers wrap their rates table in their own [`RateSource`].
#[derive(Debug, Clone)]
pub struct FixedRates {
    home: Currency,
    rates: HashMap<Currency, Decimal>,
}

impl FixedRates {
    /// Creates an empty table converting into `home`.
    #[must_use]
    pub fn new(home: Currency) -> Self {
        Self {
            home,
            rates: HashMap::new(),
        }
    }

    /// Adds a rate for `currency` and returns the table.
    #[must_use]
    pub fn with_rate(mut self, currency: Currency, rate: Decimal) -> Self {
        self.rates.insert(currency, rate);
        self
    }
}

impl RateSource for FixedRates {
    fn rate(&self, currency: Currency, _on: NaiveDate) -> Option<Decimal> {
        if currency == self.home {
            return Some(Decimal::ONE);
        }
        self.rates.get(&currency).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn any_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_home_currency_is_identity() {
        let rates = FixedRates::new(Currency::Usd);
        assert_eq!(rates.rate(Currency::Usd, any_date()), Some(Decimal::ONE));
    }

    #[test]
    fn test_known_and_unknown_currencies() {
        let rates = FixedRates::new(Currency::Usd).with_rate(Currency::Eur, dec!(1.1));

        assert_eq!(rates.rate(Currency::Eur, any_date()), Some(dec!(1.1)));
        assert_eq!(rates.rate(Currency::Jpy, any_date()), None);
    }
}
