//! Error types for money construction, arithmetic, and parsing.

use thiserror::Error;

use crate::types::CurrencyCode;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money values and their supporting types.
///
/// Unknown numeric currency codes and missing locale data are deliberately
/// absent: those resolve to fallbacks instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Arithmetic or comparison attempted across two currencies.
    #[error("Cannot {operation} {left} and {right}: currencies differ")]
    InvalidOperation {
        /// Name of the rejected operation (e.g. "add").
        operation: &'static str,
        /// Currency of the left-hand operand.
        left: CurrencyCode,
        /// Currency of the right-hand operand.
        right: CurrencyCode,
    },

    /// Divisor must be strictly positive.
    #[error("Invalid divisor: {0}")]
    InvalidDivisor(u64),

    /// Alphabetic currency code is not three ASCII letters.
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrencyCode(String),

    /// Locale identifier could not be parsed.
    #[error("Invalid locale: {0:?}")]
    InvalidLocale(String),

    /// Exact result does not fit the storage width.
    #[error("Arithmetic overflow")]
    Overflow,
}

impl MoneyError {
    /// Returns a stable error code for callers that report errors as data.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidOperation { .. } => "INVALID_OPERATION",
            Self::InvalidDivisor(_) => "INVALID_DIVISOR",
            Self::InvalidCurrencyCode(_) => "INVALID_CURRENCY_CODE",
            Self::InvalidLocale(_) => "INVALID_LOCALE",
            Self::Overflow => "OVERFLOW",
        }
    }

    /// Builds an `InvalidOperation` for two mismatched currencies.
    #[must_use]
    pub const fn mismatch(
        operation: &'static str,
        left: CurrencyCode,
        right: CurrencyCode,
    ) -> Self {
        Self::InvalidOperation {
            operation,
            left,
            right,
        }
    }
}
