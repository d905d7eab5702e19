//! Primitive value types shared by the money core and its callers.

pub mod currency_code;
pub mod locale;

pub use currency_code::CurrencyCode;
pub use locale::{Locale, Region};
