//! Running-balance account statements.
//!
//! The statement and trial-balance views need a cumulative balance after each
//! transaction rather than aged buckets. This module carries a single
//! accumulator over the same signed per-transaction balances the aging
//! aggregator uses.

pub mod service;
pub mod types;


pub use service::StatementService;
pub use types::{AccountStatement, StatementLine};
