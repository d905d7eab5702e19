//! Locale-aware rendering of money values.
//!
//! - `conventions` - locale separators, symbol placement, default symbols
//! - `annotated` - text segments with spoken-form annotations
//! - `formatter` - the dual visual/spoken formatter

pub mod annotated;
pub mod conventions;
pub mod formatter;

pub use annotated::{AnnotatedSpan, AnnotatedText, SpokenForm};
pub use conventions::{BuiltinConventions, LocaleConventions, NumberStyle, SymbolPosition};
pub use formatter::{FormattedMoney, MoneyFormatter};
