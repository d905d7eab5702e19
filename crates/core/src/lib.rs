//! Core money logic for Purse.
//!
//! This crate contains pure value logic with ZERO I/O. Currency metadata,
//! exact arithmetic and locale formatting all live here.
//!
//! # Modules
//!
//! - `currency` - ISO 4217 registry and per-region symbol overrides
//! - `money` - the exact `Money` value type
//! - `format` - dual visual/spoken formatting

pub mod currency;
pub mod format;
pub mod money;

pub use currency::{CurrencyRegistry, SymbolOverride, SymbolOverrideTable};
pub use format::{FormattedMoney, MoneyFormatter, SpokenForm};
pub use money::Money;
pub use purse_shared::{CurrencyCode, Locale, MoneyError, MoneyResult};
