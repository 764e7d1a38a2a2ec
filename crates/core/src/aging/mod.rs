//! Date-bucketed aging of open receivable/payable balances.
//!
//! Partitions each open transaction's outstanding balance into ordered,
//! non-overlapping time buckets (current, past due, long past due, oldest)
//! relative to a reference date, with optional conversion into a target
//! currency.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use error::AgingError;
pub use service::AgingService;
pub use types::{AgingResult, AgingThresholds, OpenTransaction, TransactionKind};
