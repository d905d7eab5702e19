//! Locale number and currency-symbol conventions.
//!
//! The formatter asks a [`LocaleConventions`] implementation for separators,
//! symbol placement and default symbols, then layers the override table on
//! top. Hosts with real locale data implement the trait themselves;
//! [`BuiltinConventions`] carries a small compiled-in subset.

use std::borrow::Cow;

use purse_shared::{CurrencyCode, Locale};

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// Before the number, e.g. "$12.34".
    Prefix,
    /// After the number, separated by a space, e.g. "12,34 €".
    Suffix,
}

/// Separators and symbol placement for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberStyle {
    /// Thousands separator.
    pub grouping: &'static str,
    /// Decimal separator.
    pub decimal: &'static str,
    /// Symbol placement.
    pub position: SymbolPosition,
}

impl NumberStyle {
    /// `1,234.56` with a leading symbol.
    pub const ENGLISH: Self = Self {
        grouping: ",",
        decimal: ".",
        position: SymbolPosition::Prefix,
    };

    /// `1 234,56` with a trailing symbol.
    pub const FRENCH: Self = Self {
        grouping: " ",
        decimal: ",",
        position: SymbolPosition::Suffix,
    };

    /// `1.234,56` with a trailing symbol.
    pub const GERMAN: Self = Self {
        grouping: ".",
        decimal: ",",
        position: SymbolPosition::Suffix,
    };
}

/// Source of default (non-overridden) locale formatting data.
pub trait LocaleConventions: Send + Sync {
    /// Separators and symbol placement for `locale`.
    fn number_style(&self, locale: &Locale) -> NumberStyle;

    /// Default symbol for `currency` in `locale`, or `None` to show the code.
    fn currency_symbol(&self, locale: &Locale, currency: CurrencyCode) -> Option<Cow<'static, str>>;
}

/// Compiled-in conventions for English, French, German, Japanese, Chinese
/// and Korean. Other languages use the English style.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinConventions;

impl LocaleConventions for BuiltinConventions {
    fn number_style(&self, locale: &Locale) -> NumberStyle {
        match locale.language() {
            "fr" => NumberStyle::FRENCH,
            "de" => NumberStyle::GERMAN,
            _ => NumberStyle::ENGLISH,
        }
    }

    fn currency_symbol(
        &self,
        locale: &Locale,
        currency: CurrencyCode,
    ) -> Option<Cow<'static, str>> {
        let code = currency.as_str();
        let localized = match locale.language() {
            "fr" => french_symbol(code),
            "de" => german_symbol(code),
            "ja" => japanese_symbol(code),
            _ => None,
        };
        localized.or_else(|| common_symbol(code)).map(Cow::Borrowed)
    }
}

fn common_symbol(code: &str) -> Option<&'static str> {
    Some(match code {
        "AUD" => "A$",
        "BRL" => "R$",
        "CAD" => "CA$",
        "CNY" => "CN¥",
        "EUR" => "€",
        "GBP" => "£",
        "HKD" => "HK$",
        "ILS" => "₪",
        "INR" => "₹",
        "JPY" => "¥",
        "KRW" => "₩",
        "MXN" => "MX$",
        "NZD" => "NZ$",
        "TWD" => "NT$",
        "USD" => "US$",
        "VND" => "₫",
        "XXX" => "¤",
        _ => return None,
    })
}

fn french_symbol(code: &str) -> Option<&'static str> {
    Some(match code {
        "AUD" => "$AU",
        "CAD" => "$CA",
        "GBP" => "£GB",
        "HKD" => "$HK",
        "JPY" => "JPY",
        "NZD" => "$NZ",
        "USD" => "$US",
        _ => return None,
    })
}

fn german_symbol(code: &str) -> Option<&'static str> {
    Some(match code {
        "AUD" => "AU$",
        "USD" => "$",
        _ => return None,
    })
}

fn japanese_symbol(code: &str) -> Option<&'static str> {
    Some(match code {
        "CNY" => "元",
        "JPY" => "￥",
        "USD" => "$",
        _ => return None,
    })
}
