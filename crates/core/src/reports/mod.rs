//! Per-account report assembly.
//!
//! Ages every account in a batch, suppresses zero balances when asked, and
//! appends grand totals - the layer the rendering side consumes.

pub mod error;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use service::ReportService;
pub use types::{
    AccountAgingInput, AccountAgingRow, AgedBalanceOptions, AgedBalanceReport, ReportKind,
};
