//! Aging aggregation service.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::AgingError;
use super::types::{AgingResult, AgingThresholds, OpenTransaction};

/// Service for aging open account balances into overdue buckets.
pub struct AgingService;

impl AgingService {
    /// Ages a single transaction into exclusive buckets.
    ///
    /// The bucket boundaries are inclusive on the more-overdue side: a
    /// transaction exactly `t1` days overdue lands in the second bucket, and
    /// exactly `t2` days overdue lands in the third. A negative overdue count
    /// (not yet due) lands entirely in `current`. Delivery entries carry no
    /// balance and return an all-zero result.
    ///
    /// Three cumulative `>=` comparisons are taken first, then subtracted
    /// pairwise into exclusive buckets, so the conservation invariant
    /// `current + bucket_1 + bucket_2 + bucket_3 == total` holds by
    /// construction. No intermediate rounding is applied; `rate` scales every
    /// figure uniformly.
    #[must_use]
    pub fn age_transaction(
        tx: &OpenTransaction,
        as_of: NaiveDate,
        thresholds: AgingThresholds,
        show_all: bool,
        rate: Decimal,
    ) -> AgingResult {
        if !tx.kind.is_financial() {
            return AgingResult::default();
        }

        let balance = tx.balance(show_all);
        let days = tx.days_overdue(as_of);

        // Cumulative amounts: each threshold that has passed claims the
        // whole balance.
        let due = if days >= 0 { balance } else { Decimal::ZERO };
        let overdue_1 = if days >= thresholds.t1 {
            balance
        } else {
            Decimal::ZERO
        };
        let overdue_2 = if days >= thresholds.t2 {
            balance
        } else {
            Decimal::ZERO
        };

        AgingResult {
            current: balance - due,
            bucket_1: due - overdue_1,
            bucket_2: overdue_1 - overdue_2,
            bucket_3: overdue_2,
            total: balance,
        }
        .scaled(rate)
    }

    /// Ages a list of open transactions into one accumulated result.
    ///
    /// Transactions are processed in stable date-ascending order so that
    /// accumulation is deterministic regardless of input order. An empty list
    /// yields an all-zero result.
    ///
    /// # Errors
    ///
    /// Returns [`AgingError::InvalidThresholds`] when the thresholds are not
    /// positive and strictly ordered, and [`AgingError::NegativeRate`] when
    /// `rate` is negative.
    pub fn aggregate(
        transactions: &[OpenTransaction],
        as_of: NaiveDate,
        thresholds: AgingThresholds,
        show_all: bool,
        rate: Decimal,
    ) -> Result<AgingResult, AgingError> {
        thresholds.validate()?;
        if rate.is_sign_negative() {
            return Err(AgingError::NegativeRate(rate));
        }

        let mut ordered: Vec<&OpenTransaction> = transactions.iter().collect();
        ordered.sort_by_key(|tx| tx.transaction_date);

        let mut totals = AgingResult::default();
        for tx in ordered {
            totals += Self::age_transaction(tx, as_of, thresholds, show_all, rate);
        }
        Ok(totals)
    }
}
