//! The `Money` value type.
//!
//! CRITICAL: Never use floating-point for money. Amounts are integers scaled
//! by a divisor; comparisons cross-multiply in 128-bit integers.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use purse_shared::{CurrencyCode, MoneyError, MoneyResult};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::currency::{CurrencyRegistry, DEFAULT_DIVISOR};

/// A monetary amount: `amount / divisor` units of `currency`.
///
/// Two values are equal when they name the same currency and the same
/// rational value, so `12340/1000 AUD == 1234/100 AUD`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Money {
    amount: i64,
    divisor: u64,
    currency: CurrencyCode,
}

impl Money {
    /// Creates an amount with the default divisor of 100.
    ///
    /// The divisor is NOT looked up from the currency: `Money::new(1234, JPY)`
    /// is 12.34 yen.
    #[must_use]
    pub const fn new(amount: i64, currency: CurrencyCode) -> Self {
        Self {
            amount,
            divisor: DEFAULT_DIVISOR,
            currency,
        }
    }

    /// Creates an amount with an explicit divisor.
    pub const fn with_divisor(
        amount: i64,
        currency: CurrencyCode,
        divisor: u64,
    ) -> MoneyResult<Self> {
        if divisor == 0 {
            return Err(MoneyError::InvalidDivisor(divisor));
        }
        Ok(Self {
            amount,
            divisor,
            currency,
        })
    }

    /// Creates an amount from an alphabetic code string, default divisor.
    pub fn parse_code(amount: i64, currency: &str) -> MoneyResult<Self> {
        Ok(Self::new(amount, currency.parse()?))
    }

    /// Creates an amount from a numeric ISO 4217 code, inferring the divisor.
    ///
    /// Unknown codes resolve to `XXX`.
    #[must_use]
    pub fn from_numeric(amount: i64, numeric: i32) -> Self {
        Self::inferred_in(CurrencyRegistry::iso4217(), amount, numeric)
    }

    /// Creates an amount from a numeric ISO 4217 code with an explicit divisor.
    pub fn from_numeric_with_divisor(amount: i64, numeric: i32, divisor: u64) -> MoneyResult<Self> {
        Self::from_numeric_in(CurrencyRegistry::iso4217(), amount, numeric, Some(divisor))
    }

    /// Creates an amount from a numeric code resolved against `registry`.
    ///
    /// `divisor: None` infers the registry's standard divisor.
    pub fn from_numeric_in(
        registry: &CurrencyRegistry,
        amount: i64,
        numeric: i32,
        divisor: Option<u64>,
    ) -> MoneyResult<Self> {
        match divisor {
            Some(divisor) => {
                let (currency, _) = registry.resolve_numeric(numeric);
                Self::with_divisor(amount, currency, divisor)
            }
            None => Ok(Self::inferred_in(registry, amount, numeric)),
        }
    }

    /// Numeric code with the registry's standard divisor, which is never zero.
    fn inferred_in(registry: &CurrencyRegistry, amount: i64, numeric: i32) -> Self {
        let (currency, divisor) = registry.resolve_numeric(numeric);
        debug!(
            numeric,
            %currency,
            divisor,
            "Inferred divisor from currency registry"
        );
        Self {
            amount,
            divisor,
            currency,
        }
    }

    /// Stored integer amount.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// Divisor converting `amount` to units.
    #[must_use]
    pub const fn divisor(&self) -> u64 {
        self.divisor
    }

    /// Alphabetic currency code.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// True iff both values name the same currency.
    #[must_use]
    pub fn same_currency(&self, other: &Self) -> bool {
        self.currency == other.currency
    }

    /// Exact sum of two same-currency amounts.
    ///
    /// Differing divisors are combined as `a1*d2 + a2*d1` over `d1*d2`, then
    /// reduced to lowest terms.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency("add", other)?;
        self.combine(other, i128::checked_add)
    }

    /// Exact difference of two same-currency amounts.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency("subtract", other)?;
        self.combine(other, i128::checked_sub)
    }

    /// The same amount with the opposite sign.
    pub fn negate(&self) -> MoneyResult<Self> {
        let amount = self.amount.checked_neg().ok_or(MoneyError::Overflow)?;
        Ok(Self { amount, ..*self })
    }

    /// Orders two same-currency amounts by value.
    pub fn try_cmp(&self, other: &Self) -> MoneyResult<Ordering> {
        self.ensure_same_currency("compare", other)?;
        Ok(self.cross_cmp(other))
    }

    /// Value as a decimal. Exact for power-of-ten divisors.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        match power_of_ten(self.divisor) {
            Some(scale) => Decimal::new(self.amount, scale),
            None => Decimal::from(self.amount) / Decimal::from(self.divisor),
        }
    }

    /// Applies `op` to the numerators over a common denominator in 128 bits.
    ///
    /// Fails only if the reduced result does not fit `i64` / `u64`.
    fn combine(&self, other: &Self, op: fn(i128, i128) -> Option<i128>) -> MoneyResult<Self> {
        let same_divisor = self.divisor == other.divisor;
        // |i64| * u64 < 2^127, so the scaled numerators always fit.
        let (left, right, denominator) = if same_divisor {
            (
                i128::from(self.amount),
                i128::from(other.amount),
                u128::from(self.divisor),
            )
        } else {
            (
                i128::from(self.amount) * i128::from(other.divisor),
                i128::from(other.amount) * i128::from(self.divisor),
                u128::from(self.divisor) * u128::from(other.divisor),
            )
        };
        let numerator = op(left, right).ok_or(MoneyError::Overflow)?;

        // Keep a shared divisor unless the amount only fits once reduced.
        if let (true, Ok(amount)) = (same_divisor, i64::try_from(numerator)) {
            return Ok(Self { amount, ..*self });
        }

        let (numerator, denominator) = reduce_wide(numerator, denominator);
        Ok(Self {
            amount: i64::try_from(numerator).map_err(|_| MoneyError::Overflow)?,
            divisor: u64::try_from(denominator).map_err(|_| MoneyError::Overflow)?,
            currency: self.currency,
        })
    }

    fn ensure_same_currency(&self, operation: &'static str, other: &Self) -> MoneyResult<()> {
        if self.same_currency(other) {
            Ok(())
        } else {
            Err(MoneyError::mismatch(operation, self.currency, other.currency))
        }
    }

    fn cross_cmp(&self, other: &Self) -> Ordering {
        let left = i128::from(self.amount) * i128::from(other.divisor);
        let right = i128::from(other.amount) * i128::from(self.divisor);
        left.cmp(&right)
    }

    /// `(amount, divisor)` in lowest terms.
    fn reduced(&self) -> (i64, u64) {
        let g = gcd(u128::from(self.amount.unsigned_abs()), u128::from(self.divisor));
        // g divides divisor, so g <= u64::MAX; g >= 1 since divisor > 0.
        let g = u64::try_from(g).unwrap_or(1);
        let amount = i128::from(self.amount) / i128::from(g);
        (
            i64::try_from(amount).unwrap_or(self.amount),
            self.divisor / g,
        )
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.same_currency(other) && self.cross_cmp(other) == Ordering::Equal
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.currency.hash(state);
        self.reduced().hash(state);
    }
}

impl PartialOrd for Money {
    /// `None` for different currencies.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.to_decimal(), self.currency)
    }
}

macro_rules! currency_constructors {
    ($($name:ident => $code:literal / $divisor:literal;)*) => {
        impl Money {
            $(
                #[doc = concat!(
                    "Creates an amount in ", $code, " with divisor ", stringify!($divisor), "."
                )]
                #[must_use]
                pub const fn $name(amount: i64) -> Self {
                    Self {
                        amount,
                        divisor: $divisor,
                        currency: CurrencyCode::from_static($code),
                    }
                }
            )*
        }
    };
}

currency_constructors! {
    aud => "AUD" / 100;
    brl => "BRL" / 100;
    cad => "CAD" / 100;
    clp => "CLP" / 1;
    cny => "CNY" / 100;
    dkk => "DKK" / 100;
    eur => "EUR" / 100;
    gbp => "GBP" / 100;
    hkd => "HKD" / 100;
    idr => "IDR" / 100;
    ils => "ILS" / 100;
    jpy => "JPY" / 1;
    krw => "KRW" / 1;
    nzd => "NZD" / 100;
    rub => "RUB" / 100;
    sgd => "SGD" / 100;
    twd => "TWD" / 100;
    usd => "USD" / 100;
    xxx => "XXX" / 100;
}

/// `Some(k)` if `divisor == 10^k`.
pub(crate) fn power_of_ten(divisor: u64) -> Option<u32> {
    let mut rest = divisor;
    let mut scale = 0;
    while rest > 1 && rest % 10 == 0 {
        rest /= 10;
        scale += 1;
    }
    (rest == 1).then_some(scale)
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn reduce_wide(numerator: i128, denominator: u128) -> (i128, u128) {
    if numerator == 0 {
        return (0, 1);
    }
    let g = gcd(numerator.unsigned_abs(), denominator);
    if g <= 1 {
        return (numerator, denominator);
    }
    // g divides |numerator| <= 2^127, so it fits in i128 unless numerator == i128::MIN
    // and g == 2^127, in which case the quotient is -1.
    match i128::try_from(g) {
        Ok(g_signed) => (numerator / g_signed, denominator / g),
        Err(_) => (-1, denominator / g),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    const AUD: CurrencyCode = CurrencyCode::from_static("AUD");
    const JPY: CurrencyCode = CurrencyCode::from_static("JPY");

    #[test]
    fn test_same_currency_add() {
        let c1 = Money::aud(1234);
        let c2 = Money::aud(138);
        let expected = Money::aud(1372);

        assert!(c1.same_currency(&c2));
        assert!(c2.same_currency(&expected));
        assert_eq!(c1.add(&c2).unwrap(), expected);
        assert_eq!(c2.add(&c1).unwrap(), expected);
    }

    #[test]
    fn test_mixed_currency_add_fails() {
        let c1 = Money::aud(1234);
        let c2 = Money::brl(1234);

        assert!(!c1.same_currency(&c2));
        assert!(!c2.same_currency(&c1));

        let err = c1.add(&c2).unwrap_err();
        assert_eq!(
            err,
            MoneyError::InvalidOperation {
                operation: "add",
                left: AUD,
                right: CurrencyCode::from_static("BRL"),
            }
        );
    }

    #[test]
    fn test_add_different_divisors_is_exact() {
        // 12.34 + 0.005 = 12.345
        let a = Money::aud(1234);
        let b = Money::with_divisor(5, AUD, 1000).unwrap();
        let sum = a.add(&b).unwrap();

        assert_eq!(sum, Money::with_divisor(12345, AUD, 1000).unwrap());
        assert_eq!((sum.amount(), sum.divisor()), (2469, 200));
        assert_eq!(sum.to_decimal(), dec!(12.345));
    }

    #[test]
    fn test_add_non_decimal_divisors() {
        // 1/3 + 1/6 = 1/2
        let a = Money::with_divisor(1, AUD, 3).unwrap();
        let b = Money::with_divisor(1, AUD, 6).unwrap();
        let sum = a.add(&b).unwrap();
        assert_eq!((sum.amount(), sum.divisor()), (1, 2));
        assert_eq!(sum, Money::aud(50));
    }

    #[test]
    fn test_add_overflow_is_reported() {
        let a = Money::aud(i64::MAX);
        assert_eq!(a.add(&Money::aud(1)), Err(MoneyError::Overflow));
        assert_eq!(
            Money::aud(i64::MIN).sub(&Money::aud(1)),
            Err(MoneyError::Overflow)
        );
    }

    #[test]
    fn test_sub_min_amount_within_range() {
        // -0.01 - (i64::MIN / 100) is exactly i64::MAX / 100
        let diff = Money::aud(-1).sub(&Money::aud(i64::MIN)).unwrap();
        assert_eq!((diff.amount(), diff.divisor()), (i64::MAX, 100));
        // 2^63 / 100 only fits once reduced to 2^61 / 25
        let negated = Money::aud(0).sub(&Money::aud(i64::MIN)).unwrap();
        assert_eq!((negated.amount(), negated.divisor()), (1_i64 << 61, 25));
    }

    #[test]
    fn test_add_reduces_before_overflowing() {
        // (MAX + MAX) / 2 == MAX / 1
        let half = Money::with_divisor(i64::MAX, AUD, 2).unwrap();
        let sum = half.add(&half).unwrap();
        assert_eq!((sum.amount(), sum.divisor()), (i64::MAX, 1));
    }

    #[test]
    fn test_same_divisor_sum_keeps_divisor() {
        let sum = Money::aud(1234).add(&Money::aud(138)).unwrap();
        assert_eq!((sum.amount(), sum.divisor()), (1372, 100));
    }

    #[test]
    fn test_divisor_invariant_equality() {
        let a = Money::with_divisor(12340, AUD, 1000).unwrap();
        let b = Money::aud(1234);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(Money::aud(1234), Money::usd(1234));
    }

    #[test]
    fn test_equal_values_hash_equal() {
        let mut set = HashSet::new();
        set.insert(Money::with_divisor(12340, AUD, 1000).unwrap());
        set.insert(Money::aud(1234));
        set.insert(Money::with_divisor(0, AUD, 7).unwrap());
        set.insert(Money::aud(0));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_zero_divisor_rejected() {
        assert_eq!(
            Money::with_divisor(1, AUD, 0),
            Err(MoneyError::InvalidDivisor(0))
        );
        assert_eq!(
            Money::from_numeric_with_divisor(1, 36, 0),
            Err(MoneyError::InvalidDivisor(0))
        );
    }

    #[test]
    fn test_numeric_lookup() {
        assert_eq!(
            Money::from_numeric_with_divisor(1234, 36, 100).unwrap(),
            Money::aud(1234)
        );
        assert_eq!(Money::from_numeric(1234, 9999), Money::xxx(1234));
    }

    #[test]
    fn test_from_numeric_matches_global_registry() {
        for numeric in [36, 392, 9999] {
            let direct = Money::from_numeric(1234, numeric);
            let injected =
                Money::from_numeric_in(CurrencyRegistry::iso4217(), 1234, numeric, None).unwrap();
            assert_eq!(
                (direct.amount(), direct.divisor(), direct.currency()),
                (injected.amount(), injected.divisor(), injected.currency())
            );
        }
    }

    #[test]
    fn test_divisor_inference() {
        let aud = Money::from_numeric(1234, 36);
        assert_eq!(aud, Money::aud(1234));
        assert_eq!(aud.divisor(), 100);

        let yen = Money::from_numeric(1234, 392);
        assert_eq!(yen.divisor(), 1);
        assert_eq!(yen, Money::jpy(1234));

        // String codes never infer
        let yen = Money::new(1234, JPY);
        assert_eq!(yen.divisor(), 100);
        assert_eq!(yen.to_decimal(), dec!(12.34));

        assert_eq!(
            Money::from_numeric_with_divisor(12340, 36, 1000).unwrap(),
            Money::aud(1234)
        );
    }

    #[test]
    fn test_parse_code() {
        assert_eq!(Money::parse_code(1234, "aud").unwrap(), Money::aud(1234));
        assert!(matches!(
            Money::parse_code(1234, "AU"),
            Err(MoneyError::InvalidCurrencyCode(_))
        ));
    }

    #[test]
    fn test_sub_and_negate() {
        let a = Money::aud(1000);
        let b = Money::with_divisor(2505, AUD, 1000).unwrap();
        assert_eq!(a.sub(&b).unwrap(), Money::with_divisor(7495, AUD, 1000).unwrap());
        assert_eq!(a.negate().unwrap(), Money::aud(-1000));
        assert!(a.negate().unwrap().is_negative());
        assert_eq!(Money::aud(i64::MIN).negate(), Err(MoneyError::Overflow));
        assert!(matches!(
            a.sub(&Money::usd(1)),
            Err(MoneyError::InvalidOperation { operation: "subtract", .. })
        ));
    }

    #[test]
    fn test_ordering() {
        let a = Money::aud(1234);
        let b = Money::with_divisor(12341, AUD, 1000).unwrap();
        assert_eq!(a.try_cmp(&b).unwrap(), Ordering::Less);
        assert!(a < b);
        assert!(b > a);
        assert_eq!(a.partial_cmp(&Money::usd(1)), None);
        assert!(matches!(
            a.try_cmp(&Money::usd(1)),
            Err(MoneyError::InvalidOperation { operation: "compare", .. })
        ));
    }

    #[test]
    fn test_to_decimal_and_display() {
        assert_eq!(Money::aud(1234).to_decimal(), dec!(12.34));
        assert_eq!(Money::jpy(1234).to_decimal(), dec!(1234));
        assert_eq!(Money::aud(-5).to_string(), "-0.05 AUD");
        assert_eq!(
            Money::with_divisor(1, AUD, 4).unwrap().to_decimal(),
            dec!(0.25)
        );
    }

    #[test]
    fn test_power_of_ten() {
        assert_eq!(power_of_ten(1), Some(0));
        assert_eq!(power_of_ten(100), Some(2));
        assert_eq!(power_of_ten(1000), Some(3));
        assert_eq!(power_of_ten(250), None);
        assert_eq!(power_of_ten(3), None);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(Money::aud(1234)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"amount": 1234, "divisor": 100, "currency": "AUD"})
        );
    }
}
