//! ISO 4217 currency registry.
//!
//! Maps numeric codes to alphabetic codes and standard minor units. The table
//! is immutable once built; the process-wide instance is created lazily from
//! the compiled-in data and never mutated.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use purse_shared::CurrencyCode;
use tracing::debug;

use super::iso4217;

/// Divisor used whenever no minor-unit count is known (two decimal places).
pub const DEFAULT_DIVISOR: u64 = 100;

/// Decimal places matching [`DEFAULT_DIVISOR`].
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

static ISO_4217: Lazy<CurrencyRegistry> =
    Lazy::new(|| CurrencyRegistry::new(iso4217::TABLE.iter().copied(), iso4217::FALLBACK));

/// One registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    /// Alphabetic code.
    pub code: CurrencyCode,
    /// Numeric code.
    pub numeric: u16,
    /// Standard minor units, `None` when ISO 4217 defines none.
    pub minor_units: Option<u8>,
}

impl CurrencyInfo {
    /// Creates an entry.
    #[must_use]
    pub const fn new(code: CurrencyCode, numeric: u16, minor_units: Option<u8>) -> Self {
        Self {
            code,
            numeric,
            minor_units,
        }
    }

    /// Standard divisor (`10^minor_units`), if minor units are defined.
    #[must_use]
    pub fn divisor(&self) -> Option<u64> {
        self.minor_units.map(|units| 10u64.pow(u32::from(units)))
    }
}

/// Read-only lookup table for ISO 4217 currencies.
#[derive(Debug, Clone)]
pub struct CurrencyRegistry {
    by_numeric: HashMap<u16, CurrencyInfo>,
    by_code: HashMap<CurrencyCode, CurrencyInfo>,
    fallback: CurrencyCode,
}

impl CurrencyRegistry {
    /// Builds a registry from entries and the code used for unknown numbers.
    ///
    /// Later entries win on duplicate codes.
    pub fn new(entries: impl IntoIterator<Item = CurrencyInfo>, fallback: CurrencyCode) -> Self {
        let mut by_numeric = HashMap::new();
        let mut by_code = HashMap::new();
        for info in entries {
            by_numeric.insert(info.numeric, info);
            by_code.insert(info.code, info);
        }
        Self {
            by_numeric,
            by_code,
            fallback,
        }
    }

    /// The full compiled-in ISO 4217 registry.
    #[must_use]
    pub fn iso4217() -> &'static Self {
        &ISO_4217
    }

    /// Code that unknown numeric codes resolve to.
    #[must_use]
    pub const fn fallback(&self) -> CurrencyCode {
        self.fallback
    }

    /// Looks up an entry by numeric code.
    #[must_use]
    pub fn lookup_numeric(&self, numeric: i32) -> Option<&CurrencyInfo> {
        u16::try_from(numeric)
            .ok()
            .and_then(|n| self.by_numeric.get(&n))
    }

    /// Looks up an entry by alphabetic code.
    #[must_use]
    pub fn lookup_code(&self, code: CurrencyCode) -> Option<&CurrencyInfo> {
        self.by_code.get(&code)
    }

    /// Resolves a numeric code to its alphabetic code and standard divisor.
    ///
    /// Unknown codes resolve to the fallback currency. Currencies without
    /// minor units get [`DEFAULT_DIVISOR`].
    #[must_use]
    pub fn resolve_numeric(&self, numeric: i32) -> (CurrencyCode, u64) {
        if let Some(info) = self.lookup_numeric(numeric) {
            return (info.code, info.divisor().unwrap_or(DEFAULT_DIVISOR));
        }

        debug!(numeric, fallback = %self.fallback, "Unknown numeric currency code");
        let divisor = self
            .lookup_code(self.fallback)
            .and_then(CurrencyInfo::divisor)
            .unwrap_or(DEFAULT_DIVISOR);
        (self.fallback, divisor)
    }

    /// Number of fractional digits normally shown for `code`.
    #[must_use]
    pub fn decimal_places(&self, code: CurrencyCode) -> u32 {
        self.lookup_code(code)
            .and_then(|info| info.minor_units)
            .map_or(DEFAULT_DECIMAL_PLACES, u32::from)
    }
}

impl Default for CurrencyRegistry {
    fn default() -> Self {
        Self::iso4217().clone()
    }
}
