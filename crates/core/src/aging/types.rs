//! Aging domain types.
//!
//! This module defines the open-transaction input record, the bucket
//! thresholds, and the aged-balance output accumulated by the aggregator.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of open accounting entry for an account.
///
/// Credit notes, payments, and deposits reduce the account balance; all other
/// kinds increase it. The sign is a pure function of the kind and never varies
/// per instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Sales or purchase invoice.
    Invoice,
    /// Credit note issued against an invoice.
    CreditNote,
    /// Payment (received or made).
    Payment,
    /// Customer or supplier deposit.
    Deposit,
    /// General journal entry.
    Journal,
    /// Delivery note. Carries no financial balance and is never aged.
    Delivery,
}

impl TransactionKind {
    /// Signed direction this kind contributes to the account balance.
    #[must_use]
    pub fn sign(self) -> Decimal {
        match self {
            Self::CreditNote | Self::Payment | Self::Deposit => Decimal::NEGATIVE_ONE,
            Self::Invoice | Self::Journal | Self::Delivery => Decimal::ONE,
        }
    }

    /// Returns true if this kind participates in aging and statements.
    #[must_use]
    pub fn is_financial(self) -> bool {
        !matches!(self, Self::Delivery)
    }
}

/// One open accounting entry (invoice, credit note, payment, deposit, journal)
/// for a customer or supplier account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenTransaction {
    /// Kind of entry.
    pub kind: TransactionKind,
    /// Display reference (document number). Not used in any calculation.
    pub reference: String,
    /// Calendar date the entry was posted.
    pub transaction_date: NaiveDate,
    /// Date payment is expected. Only meaningful for invoices; other kinds
    /// fall due on their transaction date.
    pub due_date: NaiveDate,
    /// Signed monetary magnitude before allocation.
    pub gross_amount: Decimal,
    /// Amount already matched against other transactions.
    pub allocated_amount: Decimal,
}

impl OpenTransaction {
    /// Outstanding balance this entry contributes to the account.
    ///
    /// When `show_all` is true the allocation is ignored and the full gross
    /// amount is used (the "show all including settled" audit view).
    #[must_use]
    pub fn balance(&self, show_all: bool) -> Decimal {
        let allocated = if show_all {
            Decimal::ZERO
        } else {
            self.allocated_amount
        };
        self.kind.sign() * (self.gross_amount - allocated)
    }

    /// Date this entry falls due: the due date for invoices, the transaction
    /// date for everything else.
    #[must_use]
    pub fn effective_due_date(&self) -> NaiveDate {
        match self.kind {
            TransactionKind::Invoice => self.due_date,
            _ => self.transaction_date,
        }
    }

    /// Whole days this entry is overdue as of the reference date.
    ///
    /// Negative means not yet due.
    #[must_use]
    pub fn days_overdue(&self, as_of: NaiveDate) -> i64 {
        as_of
            .signed_duration_since(self.effective_due_date())
            .num_days()
    }
}

/// Bucket boundaries in days overdue, e.g. 30 and 60.
///
/// Supplied by company preferences; always passed explicitly, never read from
/// global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingThresholds {
    /// Days overdue at which a balance leaves the first past-due bucket.
    pub t1: i64,
    /// Days overdue at which a balance leaves the second past-due bucket.
    pub t2: i64,
}

impl AgingThresholds {
    /// Creates thresholds from two day counts.
    #[must_use]
    pub const fn new(t1: i64, t2: i64) -> Self {
        Self { t1, t2 }
    }

    /// Checks that the thresholds are positive and strictly ordered.
    ///
    /// # Errors
    ///
    /// Returns [`super::AgingError::InvalidThresholds`] when `t1 <= 0` or
    /// `t1 >= t2`. Unordered thresholds would produce overlapping or negative
    /// buckets, so they are rejected up front.
    pub fn validate(self) -> Result<Self, super::AgingError> {
        if self.t1 <= 0 || self.t1 >= self.t2 {
            return Err(super::AgingError::InvalidThresholds {
                t1: self.t1,
                t2: self.t2,
            });
        }
        Ok(self)
    }
}

impl Default for AgingThresholds {
    fn default() -> Self {
        Self { t1: 30, t2: 60 }
    }
}

impl From<&duebook_shared::config::AgingPreferences> for AgingThresholds {
    fn from(prefs: &duebook_shared::config::AgingPreferences) -> Self {
        Self {
            t1: prefs.past_due_days_1,
            t2: prefs.past_due_days_2,
        }
    }
}

/// Aged balance for one account: four exclusive buckets plus the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingResult {
    /// Portion not yet due.
    pub current: Decimal,
    /// Portion due today or overdue by fewer than `t1` days.
    pub bucket_1: Decimal,
    /// Portion overdue by `t1` to `t2 - 1` days.
    pub bucket_2: Decimal,
    /// Portion overdue by `t2` days or more.
    pub bucket_3: Decimal,
    /// Sum of all transaction balances.
    pub total: Decimal,
}

impl AgingResult {
    /// Returns true if the buckets sum exactly to the total.
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        self.current + self.bucket_1 + self.bucket_2 + self.bucket_3 == self.total
    }

    /// Returns true if the total is within `epsilon` of zero.
    ///
    /// Used by the post-aggregation zero-balance suppression filter; the
    /// comparison is against the unrounded total.
    #[must_use]
    pub fn is_zero_within(&self, epsilon: Decimal) -> bool {
        self.total.abs() <= epsilon
    }

    /// Returns this result with every figure scaled by `rate`.
    #[must_use]
    pub fn scaled(self, rate: Decimal) -> Self {
        Self {
            current: self.current * rate,
            bucket_1: self.bucket_1 * rate,
            bucket_2: self.bucket_2 * rate,
            bucket_3: self.bucket_3 * rate,
            total: self.total * rate,
        }
    }
}

impl std::ops::AddAssign for AgingResult {
    fn add_assign(&mut self, rhs: Self) {
        self.current += rhs.current;
        self.bucket_1 += rhs.bucket_1;
        self.bucket_2 += rhs.bucket_2;
        self.bucket_3 += rhs.bucket_3;
        self.total += rhs.total;
    }
}
