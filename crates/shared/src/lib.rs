//! Shared value types, errors, and configuration for Purse.
//!
//! This crate provides the types used across all other crates:
//! - Alphabetic currency codes and locale identifiers
//! - The money error type
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, FormatConfig};
pub use error::{MoneyError, MoneyResult};
pub use types::{CurrencyCode, Locale, Region};
