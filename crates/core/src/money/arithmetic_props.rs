//! Property-based tests for money arithmetic and equality.

use proptest::prelude::*;
use purse_shared::{CurrencyCode, MoneyError};

use super::value::Money;

/// Strategy for amounts well inside the range where cross products fit.
fn amount() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..1_000_000_000i64
}

/// Strategy for divisors, mostly powers of ten with a few odd ones.
fn divisor() -> impl Strategy<Value = u64> {
    prop_oneof![
        Just(1u64),
        Just(10),
        Just(100),
        Just(1000),
        Just(10_000),
        1u64..500,
    ]
}

fn currency() -> impl Strategy<Value = CurrencyCode> {
    prop_oneof![
        Just(CurrencyCode::from_static("AUD")),
        Just(CurrencyCode::from_static("USD")),
        Just(CurrencyCode::from_static("JPY")),
        Just(CurrencyCode::from_static("XXX")),
    ]
}

fn money_in(code: CurrencyCode) -> impl Strategy<Value = Money> {
    (amount(), divisor()).prop_map(move |(a, d)| {
        Money::with_divisor(a, code, d).expect("divisor strategy never yields zero")
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Addition is commutative and keeps the currency.
    #[test]
    fn prop_add_commutative(
        (a, b) in currency().prop_flat_map(|c| (money_in(c), money_in(c))),
    ) {
        let ab = a.add(&b).unwrap();
        let ba = b.add(&a).unwrap();
        prop_assert_eq!(ab, ba);
        prop_assert!(ab.same_currency(&a));
        prop_assert!(ab.same_currency(&b));
    }

    /// Different currencies never add.
    #[test]
    fn prop_mixed_currency_add_fails(
        a in money_in(CurrencyCode::from_static("AUD")),
        b in money_in(CurrencyCode::from_static("BRL")),
    ) {
        prop_assert!(!a.same_currency(&b));
        let is_invalid_operation = matches!(a.add(&b), Err(MoneyError::InvalidOperation { .. }));
        prop_assert!(is_invalid_operation);
    }

    /// Rescaling amount and divisor by the same factor preserves equality.
    #[test]
    fn prop_equality_divisor_invariant(
        a in amount(),
        d in divisor(),
        k in 1u64..1000,
        code in currency(),
    ) {
        let base = Money::with_divisor(a, code, d).unwrap();
        let scaled = Money::with_divisor(a * i64::try_from(k).unwrap(), code, d * k).unwrap();
        prop_assert_eq!(base, scaled);
        prop_assert_eq!(scaled, base);
    }

    /// Equality is transitive across three scalings of one value.
    #[test]
    fn prop_equality_transitive(
        a in -1_000_000i64..1_000_000,
        k1 in 1u64..100,
        k2 in 1u64..100,
    ) {
        let code = CurrencyCode::from_static("AUD");
        let x = Money::aud(a);
        let y = Money::with_divisor(a * i64::try_from(k1).unwrap(), code, 100 * k1).unwrap();
        let z = Money::with_divisor(a * i64::try_from(k2).unwrap(), code, 100 * k2).unwrap();
        prop_assert_eq!(x, y);
        prop_assert_eq!(y, z);
        prop_assert_eq!(x, z);
        prop_assert_eq!(x, x);
    }

    /// a + b - b == a, whatever the divisors.
    #[test]
    fn prop_add_then_sub_round_trips(
        (a, b) in currency().prop_flat_map(|c| (money_in(c), money_in(c))),
    ) {
        let back = a.add(&b).unwrap().sub(&b).unwrap();
        prop_assert_eq!(back, a);
    }

    /// Ordering agrees with the sign of the difference.
    #[test]
    fn prop_ordering_matches_difference(
        (a, b) in currency().prop_flat_map(|c| (money_in(c), money_in(c))),
    ) {
        let diff = a.sub(&b).unwrap();
        let ordering = a.try_cmp(&b).unwrap();
        prop_assert_eq!(ordering, diff.amount().cmp(&0));
    }
}
