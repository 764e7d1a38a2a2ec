//! Running-balance computation.

use rust_decimal::Decimal;

use super::types::{AccountStatement, StatementLine};
use crate::aging::OpenTransaction;

/// Service for building running-balance statements.
pub struct StatementService;

impl StatementService {
    /// Builds a running-balance statement from open transactions.
    ///
    /// Lines are ordered date-ascending (stable, so same-day entries keep
    /// their input order). Each line's amount is the transaction's signed
    /// net balance scaled by `rate`; delivery entries carry no balance and
    /// are skipped. The closing balance equals the opening balance plus the
    /// sum of all line amounts.
    #[must_use]
    pub fn running_balance(
        transactions: &[OpenTransaction],
        opening_balance: Decimal,
        rate: Decimal,
    ) -> AccountStatement {
        let mut ordered: Vec<&OpenTransaction> = transactions
            .iter()
            .filter(|tx| tx.kind.is_financial())
            .collect();
        ordered.sort_by_key(|tx| tx.transaction_date);

        let mut balance = opening_balance;
        let mut lines = Vec::with_capacity(ordered.len());
        for tx in ordered {
            let amount = tx.balance(false) * rate;
            balance += amount;
            lines.push(StatementLine {
                transaction: tx.clone(),
                amount,
                balance,
            });
        }

        AccountStatement {
            opening_balance,
            lines,
            closing_balance: balance,
        }
    }
}
