//! Dual-output money formatting.
//!
//! Every call yields a locale-formatted visual string and a locale-invariant
//! spoken form. Both use the same rounded value:
//! - digits shown = max(registry decimal places, digits the value carries)
//! - rounding is banker's rounding, applied for display only

use purse_shared::{CurrencyCode, Locale};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::trace;

use super::annotated::{AnnotatedText, SpokenForm};
use super::conventions::{BuiltinConventions, LocaleConventions, NumberStyle, SymbolPosition};
use crate::currency::{CurrencyRegistry, SymbolOverrideTable};
use crate::money::Money;

/// Result of formatting one amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedMoney {
    /// Locale-formatted text with the spoken form attached.
    pub visual: AnnotatedText,
    /// Locale-invariant reading.
    pub spoken: SpokenForm,
    /// Whether the amount was rendered as a balance.
    pub balance_mode: bool,
}

/// Formats [`Money`] for a locale.
///
/// Holds only shared references to read-only tables, so one formatter can be
/// used from many threads.
#[derive(Clone, Copy)]
pub struct MoneyFormatter<'a> {
    registry: &'a CurrencyRegistry,
    overrides: &'a SymbolOverrideTable,
    conventions: &'a dyn LocaleConventions,
}

impl MoneyFormatter<'static> {
    /// Formatter over the compiled-in registry, overrides and conventions.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            CurrencyRegistry::iso4217(),
            SymbolOverrideTable::global(),
            &BuiltinConventions,
        )
    }
}

impl<'a> MoneyFormatter<'a> {
    /// Creates a formatter over explicit tables.
    #[must_use]
    pub fn new(
        registry: &'a CurrencyRegistry,
        overrides: &'a SymbolOverrideTable,
        conventions: &'a dyn LocaleConventions,
    ) -> Self {
        Self {
            registry,
            overrides,
            conventions,
        }
    }

    /// Formats `money` for `locale`.
    ///
    /// With `balance_mode` the signed value is shown. Otherwise the amount is
    /// a transaction: negative values are credits and show as `+` and the
    /// magnitude. The spoken form always carries the signed value.
    #[must_use]
    pub fn format(&self, money: &Money, locale: &Locale, balance_mode: bool) -> FormattedMoney {
        let digits = self.display_digits(money);
        let value = round_for_display(money.to_decimal(), digits);
        let precision = digits as usize;

        let spoken = SpokenForm::new(money.currency(), format!("{value:.precision$}"));

        let style = self.conventions.number_style(locale);
        let number = group_digits(&format!("{:.precision$}", value.abs()), &style);
        let symbol = self.symbol(locale, money.currency());
        let sign = match (value.is_sign_negative(), balance_mode) {
            (true, true) => "-",
            (true, false) => "+",
            (false, _) => "",
        };

        let text = match style.position {
            SymbolPosition::Prefix => {
                // Code-style symbols such as "CHF" need a space; glyphs do not.
                let gap = if symbol.ends_with(|c: char| c.is_ascii_alphabetic()) {
                    " "
                } else {
                    ""
                };
                format!("{sign}{symbol}{gap}{number}")
            }
            SymbolPosition::Suffix => format!("{sign}{number} {symbol}"),
        };

        FormattedMoney {
            visual: AnnotatedText::annotated(text, spoken.clone()),
            spoken,
            balance_mode,
        }
    }

    /// Fractional digits shown for `money`.
    ///
    /// At least the currency's standard places; more when the stored value
    /// carries extra digits, up to what the divisor can express.
    #[must_use]
    pub fn display_digits(&self, money: &Money) -> u32 {
        let standard = self.registry.decimal_places(money.currency());
        let carried = money
            .to_decimal()
            .normalize()
            .scale()
            .min(divisor_digits(money.divisor()));
        standard.max(carried)
    }

    fn symbol(&self, locale: &Locale, currency: CurrencyCode) -> String {
        if let Some(rule) = self.overrides.lookup(locale.region(), currency) {
            trace!(%locale, %currency, ?rule, "Currency symbol override");
            return rule.symbol().to_string();
        }
        self.conventions
            .currency_symbol(locale, currency)
            .map_or_else(|| currency.to_string(), |s| s.into_owned())
    }
}

impl Money {
    /// Formats with the compiled-in tables.
    #[must_use]
    pub fn format(&self, locale: &Locale, balance_mode: bool) -> FormattedMoney {
        MoneyFormatter::builtin().format(self, locale, balance_mode)
    }
}

fn round_for_display(value: Decimal, digits: u32) -> Decimal {
    let rounded = value.round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven);
    // Avoid rendering "-0.00".
    if rounded.is_zero() { rounded.abs() } else { rounded }
}

/// Smallest `k` with `10^k >= divisor`.
fn divisor_digits(divisor: u64) -> u32 {
    let mut digits = 0;
    let mut power: u128 = 1;
    while power < u128::from(divisor) {
        power *= 10;
        digits += 1;
    }
    digits
}

/// Applies grouping and the decimal separator to a plain "1234.56" string.
fn group_digits(plain: &str, style: &NumberStyle) -> String {
    let (integer, fraction) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain, None),
    };

    let mut out = String::with_capacity(plain.len() + integer.len() / 3 * style.grouping.len());
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push_str(style.grouping);
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push_str(style.decimal);
        out.push_str(fraction);
    }
    out
}
