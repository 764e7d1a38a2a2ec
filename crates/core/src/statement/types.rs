//! Statement data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aging::OpenTransaction;

/// One statement line: a transaction plus the cumulative balance after it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementLine {
    /// The underlying transaction.
    pub transaction: OpenTransaction,
    /// Signed amount this line moved the balance by, in target currency.
    pub amount: Decimal,
    /// Cumulative balance after this line.
    pub balance: Decimal,
}

/// Running-balance statement for one account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountStatement {
    /// Balance carried in from before the statement period.
    pub opening_balance: Decimal,
    /// Statement lines in date-ascending order.
    pub lines: Vec<StatementLine>,
    /// Balance after the last line. Equals the opening balance when the
    /// statement is empty.
    pub closing_balance: Decimal,
}
