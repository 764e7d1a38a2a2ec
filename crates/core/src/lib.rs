//! Core business logic for Duebook.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and calculations live
//! here.
//!
//! # Modules
//!
//! - `aging` - Date-bucketed aging of open receivable/payable balances
//! - `statement` - Running-balance account statements
//! - `reports` - Per-account report assembly with zero-balance suppression
//! - `currency` - Exchange rates and display-time conversion

pub mod aging;
pub mod currency;
pub mod reports;
pub mod statement;
