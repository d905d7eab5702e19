//! Per-region currency symbol overrides.
//!
//! Locale data alone renders several dollar currencies as a bare "$". These
//! overrides pin the symbol for specific (region, currency) pairs so the
//! output does not depend on whichever locale tables the host ships. Pairs
//! not listed fall through to the locale's own symbol.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use purse_shared::{CurrencyCode, Region};

static BUILTIN: Lazy<SymbolOverrideTable> = Lazy::new(SymbolOverrideTable::builtin);

/// How a currency symbol is forced for one (region, currency) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolOverride {
    /// The unqualified symbol, for the region's home currency (e.g. "$" for AUD in AU).
    Bare(&'static str),
    /// A symbol qualified with a country marker (e.g. "US$", "$AU").
    Qualified(&'static str),
    /// A full-width glyph substitution (e.g. "￥" in Japan).
    FullWidth(&'static str),
}

impl SymbolOverride {
    /// The symbol text to render.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Bare(s) | Self::Qualified(s) | Self::FullWidth(s) => *s,
        }
    }
}

/// Immutable (region, currency) → [`SymbolOverride`] table.
#[derive(Debug, Clone, Default)]
pub struct SymbolOverrideTable {
    entries: HashMap<(Region, CurrencyCode), SymbolOverride>,
}

impl SymbolOverrideTable {
    /// Builds a table from explicit entries.
    pub fn new(entries: impl IntoIterator<Item = (Region, CurrencyCode, SymbolOverride)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(region, code, rule)| ((region, code), rule))
                .collect(),
        }
    }

    /// Shared instance of the compiled-in table.
    #[must_use]
    pub fn global() -> &'static Self {
        &BUILTIN
    }

    /// The compiled-in overrides.
    #[must_use]
    pub fn builtin() -> Self {
        const AU: Region = Region::from_static("AU");
        const FR: Region = Region::from_static("FR");
        const GB: Region = Region::from_static("GB");
        const JP: Region = Region::from_static("JP");
        const US: Region = Region::from_static("US");
        const AUD: CurrencyCode = CurrencyCode::from_static("AUD");
        const JPY: CurrencyCode = CurrencyCode::from_static("JPY");
        const USD: CurrencyCode = CurrencyCode::from_static("USD");

        use SymbolOverride::{Bare, FullWidth, Qualified};

        Self::new([
            (AU, AUD, Bare("$")),
            (AU, USD, Qualified("US$")),
            (US, USD, Bare("$")),
            (US, AUD, Qualified("A$")),
            (GB, USD, Qualified("US$")),
            (GB, AUD, Qualified("A$")),
            (JP, USD, Qualified("US$")),
            (JP, AUD, Qualified("A$")),
            (JP, JPY, FullWidth("￥")),
            (FR, USD, Qualified("$US")),
            (FR, AUD, Qualified("$AU")),
        ])
    }

    /// Looks up the override for a region and currency.
    #[must_use]
    pub fn lookup(&self, region: Option<Region>, code: CurrencyCode) -> Option<&SymbolOverride> {
        self.entries.get(&(region?, code))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn region(s: &str) -> Option<Region> {
        Some(s.parse().unwrap())
    }

    fn code(s: &str) -> CurrencyCode {
        s.parse().unwrap()
    }

    #[rstest]
    #[case("AU", "AUD", SymbolOverride::Bare("$"))]
    #[case("AU", "USD", SymbolOverride::Qualified("US$"))]
    #[case("US", "USD", SymbolOverride::Bare("$"))]
    #[case("US", "AUD", SymbolOverride::Qualified("A$"))]
    #[case("JP", "JPY", SymbolOverride::FullWidth("￥"))]
    #[case("FR", "USD", SymbolOverride::Qualified("$US"))]
    fn test_builtin_entries(#[case] r: &str, #[case] c: &str, #[case] expected: SymbolOverride) {
        let table = SymbolOverrideTable::global();
        assert_eq!(table.lookup(region(r), code(c)), Some(&expected));
    }

    #[test]
    fn test_unlisted_pairs_fall_through() {
        let table = SymbolOverrideTable::global();
        assert!(table.lookup(region("GB"), code("GBP")).is_none());
        assert!(table.lookup(region("FR"), code("EUR")).is_none());
        assert!(table.lookup(region("DE"), code("USD")).is_none());
        assert!(table.lookup(None, code("AUD")).is_none());
    }

    #[test]
    fn test_symbol_text() {
        assert_eq!(SymbolOverride::Bare("$").symbol(), "$");
        assert_eq!(SymbolOverride::Qualified("US$").symbol(), "US$");
        assert_eq!(SymbolOverride::FullWidth("￥").symbol(), "￥");
    }

    #[test]
    fn test_custom_table() {
        let table = SymbolOverrideTable::new([(
            Region::from_static("NZ"),
            code("NZD"),
            SymbolOverride::Bare("$"),
        )]);
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
        assert_eq!(
            table.lookup(region("NZ"), code("NZD")).map(SymbolOverride::symbol),
            Some("$")
        );
        assert!(SymbolOverrideTable::default().is_empty());
    }
}
