//! Property-based tests for the aging aggregator.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::AgingService;
use super::types::{AgingThresholds, OpenTransaction, TransactionKind};

const AS_OF: &str = "2024-03-01";

fn as_of() -> NaiveDate {
    AS_OF.parse().unwrap()
}

/// Strategy for amounts in cents (-1,000,000.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for non-negative rates (0.0000 to 100.0000).
fn rate() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy for a transaction kind.
fn kind() -> impl Strategy<Value = TransactionKind> {
    prop_oneof![
        Just(TransactionKind::Invoice),
        Just(TransactionKind::CreditNote),
        Just(TransactionKind::Payment),
        Just(TransactionKind::Deposit),
        Just(TransactionKind::Journal),
        Just(TransactionKind::Delivery),
    ]
}

/// Strategy for one open transaction dated within a year either side of the
/// reference date.
fn transaction() -> impl Strategy<Value = OpenTransaction> {
    (kind(), -365i64..365, -365i64..365, amount(), amount()).prop_map(
        |(kind, posted_offset, due_offset, gross, allocated)| OpenTransaction {
            kind,
            reference: "PROP".to_string(),
            transaction_date: as_of() + chrono::Duration::days(posted_offset),
            due_date: as_of() + chrono::Duration::days(due_offset),
            gross_amount: gross,
            allocated_amount: allocated,
        },
    )
}

fn transactions(max_len: usize) -> impl Strategy<Value = Vec<OpenTransaction>> {
    prop::collection::vec(transaction(), 0..=max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Bucket conservation: for any transaction list and rate, the exclusive
    /// buckets sum exactly to the total.
    #[test]
    fn prop_buckets_sum_to_total(
        txs in transactions(20),
        rate in rate(),
    ) {
        let result = AgingService::aggregate(
            &txs, as_of(), AgingThresholds::default(), false, rate,
        ).unwrap();

        prop_assert!(
            result.is_conserved(),
            "buckets {:?} should sum to total {}",
            result,
            result.total
        );
    }

    /// Each transaction's balance lands in exactly one bucket.
    #[test]
    fn prop_single_transaction_fills_one_bucket(tx in transaction()) {
        let result = AgingService::age_transaction(
            &tx, as_of(), AgingThresholds::default(), false, Decimal::ONE,
        );

        let balance = if tx.kind.is_financial() {
            tx.balance(false)
        } else {
            Decimal::ZERO
        };
        let buckets = [result.current, result.bucket_1, result.bucket_2, result.bucket_3];

        prop_assert_eq!(result.total, balance);
        prop_assert!(buckets.contains(&balance));
        prop_assert!(
            buckets.iter().filter(|b| !b.is_zero()).count() <= 1,
            "at most one bucket may be non-zero: {:?}",
            buckets
        );
    }

    /// Currency scaling is linear: aging at rate r equals aging at rate 1
    /// scaled by r, element-wise.
    #[test]
    fn prop_rate_scaling_is_linear(
        txs in transactions(10),
        rate in rate(),
    ) {
        let thresholds = AgingThresholds::default();
        let base = AgingService::aggregate(&txs, as_of(), thresholds, false, Decimal::ONE).unwrap();
        let scaled = AgingService::aggregate(&txs, as_of(), thresholds, false, rate).unwrap();

        prop_assert_eq!(scaled, base.scaled(rate));
    }

    /// Aggregation is independent of input order.
    #[test]
    fn prop_aggregate_order_independent(txs in transactions(10)) {
        let thresholds = AgingThresholds::default();
        let forward = AgingService::aggregate(&txs, as_of(), thresholds, false, Decimal::ONE).unwrap();

        let mut reversed = txs;
        reversed.reverse();
        let backward =
            AgingService::aggregate(&reversed, as_of(), thresholds, false, Decimal::ONE).unwrap();

        prop_assert_eq!(forward, backward);
    }

    /// A fully allocated transaction contributes nothing when netting is on
    /// and its full gross amount when netting is off.
    #[test]
    fn prop_allocation_netting(mut tx in transaction()) {
        tx.allocated_amount = tx.gross_amount;
        prop_assume!(tx.kind.is_financial());

        let thresholds = AgingThresholds::default();
        let netted = AgingService::age_transaction(&tx, as_of(), thresholds, false, Decimal::ONE);
        let audit = AgingService::age_transaction(&tx, as_of(), thresholds, true, Decimal::ONE);

        prop_assert_eq!(netted.total, Decimal::ZERO);
        prop_assert_eq!(audit.total, tx.kind.sign() * tx.gross_amount);
    }

    /// The sign of a result's total always matches kind sign and net amount.
    #[test]
    fn prop_sign_is_pure_function_of_kind(tx in transaction()) {
        prop_assume!(tx.kind.is_financial());

        let result = AgingService::age_transaction(
            &tx, as_of(), AgingThresholds::default(), false, Decimal::ONE,
        );
        let net = tx.gross_amount - tx.allocated_amount;

        prop_assert_eq!(result.total, tx.kind.sign() * net);
    }
}
