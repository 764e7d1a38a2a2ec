//! Report data types.

use chrono::NaiveDate;
use duebook_shared::Preferences;
use duebook_shared::types::{AccountId, Currency};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aging::{AgingResult, AgingThresholds, OpenTransaction};

/// Which side of the books a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Aged customer (receivable) balances.
    CustomerBalances,
    /// Aged supplier (payable) balances.
    SupplierBalances,
}

impl ReportKind {
    /// Report type identifier used in output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CustomerBalances => "aged_customer_balances",
            Self::SupplierBalances => "aged_supplier_balances",
        }
    }
}

/// One account's input to an aged balance report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountAgingInput {
    /// Account ID.
    pub account_id: AccountId,
    /// Account code.
    pub code: String,
    /// Account display name.
    pub name: String,
    /// Multiplier converting this account's currency into the report currency.
    pub rate: Decimal,
    /// Open transactions for the account as of the report date.
    pub transactions: Vec<OpenTransaction>,
}

/// One account's aged balances in a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountAgingRow {
    /// Account ID.
    pub account_id: AccountId,
    /// Account code.
    pub code: String,
    /// Account display name.
    pub name: String,
    /// Aged balances for this account, in report currency.
    pub result: AgingResult,
}

/// Aged balance report across many accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgedBalanceReport {
    /// Report type identifier.
    pub report_type: String,
    /// Reference date balances were aged against.
    pub as_of: NaiveDate,
    /// Currency all figures are stated in.
    pub currency: Currency,
    /// Bucket thresholds the report was generated with.
    pub thresholds: AgingThresholds,
    /// Per-account rows, ordered by account code.
    pub rows: Vec<AccountAgingRow>,
    /// Element-wise sum over the retained rows.
    pub totals: AgingResult,
}

/// Options controlling aged balance report assembly.
#[derive(Debug, Clone)]
pub struct AgedBalanceOptions {
    /// Which side of the books to report.
    pub kind: ReportKind,
    /// Reference date to age against.
    pub as_of: NaiveDate,
    /// Bucket thresholds.
    pub thresholds: AgingThresholds,
    /// When true, ignore allocations and age full gross amounts.
    pub show_all: bool,
    /// When true, drop rows whose total is within `zero_epsilon` of zero.
    pub suppress_zero: bool,
    /// Absolute tolerance for the zero-balance filter, compared against the
    /// unrounded per-account total.
    pub zero_epsilon: Decimal,
    /// Currency the report is stated in.
    pub currency: Currency,
}

impl AgedBalanceOptions {
    /// Creates options with default thresholds, no suppression, and figures
    /// stated in US dollars.
    #[must_use]
    pub fn new(kind: ReportKind, as_of: NaiveDate) -> Self {
        Self {
            kind,
            as_of,
            thresholds: AgingThresholds::default(),
            show_all: false,
            suppress_zero: false,
            zero_epsilon: Decimal::new(1, 2),
            currency: Currency::Usd,
        }
    }

    /// Creates options from company preferences, with suppression enabled.
    #[must_use]
    pub fn from_preferences(kind: ReportKind, as_of: NaiveDate, prefs: &Preferences) -> Self {
        Self {
            kind,
            as_of,
            thresholds: AgingThresholds::from(&prefs.aging),
            show_all: false,
            suppress_zero: true,
            zero_epsilon: prefs.reports.zero_balance_epsilon,
            currency: prefs.reports.home_currency,
        }
    }
}
