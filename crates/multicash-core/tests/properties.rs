//! Property tests for the Cash merge algebra.

use multicash_core::Cash;
use proptest::prelude::*;

fn currency_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("USD"),
        Just("SEK"),
        Just("NOK"),
        Just("DKK"),
        Just("EUR"),
    ]
}

/// Small amounts so sums of a handful of values never overflow.
fn amount_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![Just(0i64), -1_000_000i64..1_000_000i64]
}

fn cash_strategy() -> impl Strategy<Value = Cash> {
    prop::collection::vec((currency_strategy(), amount_strategy()), 0..5).prop_map(Cash::new)
}

/// At least one currency, and no zero amounts.
fn nonzero_cash_strategy() -> impl Strategy<Value = Cash> {
    let amount = prop_oneof![-1_000_000i64..0, 1i64..1_000_000];
    prop::collection::vec((currency_strategy(), amount), 1..5).prop_map(Cash::new)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_zero_is_identity(x in cash_strategy()) {
        prop_assert_eq!(&Cash::zero() + &x, x.clone());
        prop_assert_eq!(&x + &Cash::zero(), x);
    }

    #[test]
    fn prop_addition_commutes(a in cash_strategy(), b in cash_strategy()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn prop_subtraction_keeps_every_currency(
        a in nonzero_cash_strategy(),
        b in nonzero_cash_strategy(),
    ) {
        let diff = &a - &b;
        for (code, _) in a.iter().chain(b.iter()) {
            let expected = a.get(code).unwrap_or(0) - b.get(code).unwrap_or(0);
            prop_assert_eq!(diff.get(code), Some(expected));
        }
        prop_assert_eq!(diff.len(), a.currencies().keys().chain(b.currencies().keys())
            .collect::<std::collections::BTreeSet<_>>().len());
    }

    #[test]
    fn prop_zero_minus_x_negates(x in nonzero_cash_strategy()) {
        prop_assert_eq!(&Cash::zero() - &x, -&x);
    }

    #[test]
    fn prop_decomposition_sums_back(x in nonzero_cash_strategy()) {
        // A zero entry next to non-zero ones would be dropped by the `x + 0 → x` shortcut.
        prop_assert_eq!(Cash::sum(x.to_vec()), x);
    }

    #[test]
    fn prop_scalar_multiply_then_divide(x in cash_strategy(), n in 1i64..100) {
        prop_assert_eq!(&(&x * n) / n, x);
    }

    #[test]
    fn prop_round_lands_on_interval(x in cash_strategy(), interval in 1u32..1_000) {
        let rounded = x.round(interval);
        for (_, v) in rounded.iter() {
            prop_assert_eq!(v % i64::from(interval), 0);
        }
    }
}
