//! Shared types and configuration for Duebook.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes for multi-currency reports
//! - Typed IDs for type-safe entity references
//! - Company preferences (aging thresholds, zero-balance suppression)

pub mod config;
pub mod types;

pub use config::Preferences;
