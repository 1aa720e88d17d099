//! # Cash Module
//!
//! Provides the `Cash` type: one value holding balances in several
//! currencies at once.
//!
//! ## Why Multi-Currency?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE PREMATURE COLLAPSE PROBLEM                                        │
//! │                                                                         │
//! │  Order lines: 100 SEK + 100 USD + 50 SEK                               │
//! │                                                                         │
//! │  Collapsing to one number early needs an exchange rate we don't have.  │
//! │  Keeping one balance per currency needs no rate at all:                │
//! │                                                                         │
//! │    { SEK: 15000, USD: 10000 }   (minor units, sorted by code)          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use multicash_core::Cash;
//!
//! let order = Cash::new([("SEK", 100_00), ("USD", 100_00)]);
//! let shipping = Cash::single("SEK", 50_00);
//!
//! let total = &order + &shipping;
//! assert_eq!(total, Cash::new([("SEK", 150_00), ("USD", 100_00)]));
//! assert_eq!(total.to_string(), "150 SEK, 100 USD");
//! ```
//!
//! Arithmetic lives in [`crate::arithmetic`]; this module holds the value,
//! its predicates and accessors.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::iter::Sum;
use ts_rs::TS;

use crate::arithmetic::round_half_away;
use crate::currency::{CurrencyCode, ZERO_CURRENCY};

/// Default interval for [`Cash::round`]: whole major units when the minor
/// unit is a hundredth.
pub const DEFAULT_ROUND_INTERVAL: u32 = 100;

// =============================================================================
// Cash Type
// =============================================================================

/// A monetary value with one integer minor-unit amount per currency.
///
/// ## Design Decisions
/// - **BTreeMap**: keys stay sorted by code, which fixes what `currency()`,
///   `value()` and `to_vec()` return
/// - **i64 amounts**: minor units (cents, öre), never floats
/// - **Owned map**: every operation builds a fresh map, two values never
///   share one
///
/// Equality compares the whole mapping, except that any two zero values are
/// equal no matter which currencies they name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cash {
    currencies: BTreeMap<CurrencyCode, i64>,
}

impl Cash {
    /// Creates a Cash value from (currency, amount) pairs.
    ///
    /// Keys are normalized to [`CurrencyCode`]; if two pairs land on the same
    /// code the later one wins.
    ///
    /// ## Example
    /// ```rust
    /// use multicash_core::Cash;
    ///
    /// let a = Cash::new([("USD", 100), ("SEK", 100)]);
    /// let b = Cash::new([("sek", 100), ("usd", 100)]);
    /// assert_eq!(a, b);
    /// assert_eq!(a.currency().unwrap(), "SEK");
    /// ```
    pub fn new<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<CurrencyCode>,
    {
        Cash {
            currencies: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Creates a single-currency value.
    pub fn single(currency: impl Into<CurrencyCode>, amount: i64) -> Self {
        Cash::new([(currency, amount)])
    }

    /// Wraps an already-built mapping.
    pub(crate) fn from_map(currencies: BTreeMap<CurrencyCode, i64>) -> Self {
        Cash { currencies }
    }

    /// The canonical zero: `{USD: 0}`.
    ///
    /// Additive identity for [`Cash::sum`].
    pub fn zero() -> Self {
        Cash::single(ZERO_CURRENCY, 0)
    }

    /// Folds a sequence of values over `+`, starting from [`Cash::zero`].
    ///
    /// ## Example
    /// ```rust
    /// use multicash_core::Cash;
    ///
    /// let cashes = [
    ///     Cash::single("SEK", 100),
    ///     Cash::single("SEK", 100),
    ///     Cash::single("USD", 100),
    /// ];
    /// assert_eq!(Cash::sum(&cashes), Cash::new([("SEK", 200), ("USD", 100)]));
    /// ```
    pub fn sum<I>(cashes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<Cash>,
    {
        cashes.into_iter().fold(Cash::zero(), |acc, cash| {
            let cash: &Cash = cash.borrow();
            &acc + cash
        })
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// True if every amount is zero. An empty value is zero.
    pub fn is_zero(&self) -> bool {
        self.currencies.values().all(|v| *v == 0)
    }

    /// True if there is at least one entry and every amount is above zero.
    pub fn is_positive(&self) -> bool {
        !self.is_empty() && self.currencies.values().all(|v| *v > 0)
    }

    /// True if there is at least one entry and every amount is below zero.
    pub fn is_negative(&self) -> bool {
        !self.is_empty() && self.currencies.values().all(|v| *v < 0)
    }

    /// True if no currency is present at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The first currency in canonical order.
    ///
    /// Meant for single-currency values; `None` when empty.
    pub fn currency(&self) -> Option<&CurrencyCode> {
        self.currencies.keys().next()
    }

    /// The first amount in canonical order. `None` when empty.
    pub fn value(&self) -> Option<i64> {
        self.currencies.values().next().copied()
    }

    /// Amount held in `currency`, if that currency is present.
    pub fn get(&self, currency: impl Into<CurrencyCode>) -> Option<i64> {
        self.currencies.get(&currency.into()).copied()
    }

    /// Number of currencies present.
    #[inline]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Read-only view of the sorted mapping.
    #[inline]
    pub fn currencies(&self) -> &BTreeMap<CurrencyCode, i64> {
        &self.currencies
    }

    /// Iterates entries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, i64)> + '_ {
        self.currencies.iter().map(|(k, v)| (k, *v))
    }

    /// Sum of every amount, ignoring currency.
    ///
    /// This is the key used by [`Cash::compare`]; it is not a converted total.
    pub fn total(&self) -> i64 {
        self.currencies.values().sum()
    }

    // =========================================================================
    // Derived Values
    // =========================================================================

    /// Splits into single-currency values, in canonical order.
    ///
    /// ## Example
    /// ```rust
    /// use multicash_core::Cash;
    ///
    /// let cash = Cash::new([("SEK", 150_00), ("USD", 100)]);
    /// assert_eq!(
    ///     cash.to_vec(),
    ///     vec![Cash::single("SEK", 150_00), Cash::single("USD", 100)]
    /// );
    /// ```
    pub fn to_vec(&self) -> Vec<Cash> {
        self.currencies
            .iter()
            .map(|(k, v)| Cash::single(k, *v))
            .collect()
    }

    /// Every amount replaced by its absolute value.
    pub fn abs(&self) -> Cash {
        self.map_amounts(i64::abs)
    }

    /// Rounds each amount to the nearest multiple of `interval` minor units,
    /// halves away from zero.
    ///
    /// An interval of `0` is treated as `1`.
    ///
    /// ## Example
    /// ```rust
    /// use multicash_core::Cash;
    ///
    /// let cash = Cash::new([("SEK", 100_20), ("USD", 80_75)]);
    /// assert_eq!(cash.round(100), Cash::new([("SEK", 100_00), ("USD", 81_00)]));
    /// ```
    pub fn round(&self, interval: u32) -> Cash {
        let interval = i64::from(interval.max(1));
        self.map_amounts(|v| round_half_away(v, interval) * interval)
    }

    /// [`Cash::round`] with [`DEFAULT_ROUND_INTERVAL`].
    pub fn round_default(&self) -> Cash {
        self.round(DEFAULT_ROUND_INTERVAL)
    }

    /// Builds a new value with `f` applied to every amount.
    pub(crate) fn map_amounts(&self, mut f: impl FnMut(i64) -> i64) -> Cash {
        Cash::from_map(
            self.currencies
                .iter()
                .map(|(k, v)| (k.clone(), f(*v)))
                .collect(),
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl PartialEq for Cash {
    fn eq(&self, other: &Self) -> bool {
        self.currencies == other.currencies || (self.is_zero() && other.is_zero())
    }
}

impl Eq for Cash {}

/// A zero Cash equals the integer `0`.
impl PartialEq<i64> for Cash {
    fn eq(&self, other: &i64) -> bool {
        self.is_zero() && *other == 0
    }
}

impl PartialEq<f64> for Cash {
    fn eq(&self, other: &f64) -> bool {
        self.is_zero() && *other == 0.0
    }
}

impl<K: Into<CurrencyCode>> FromIterator<(K, i64)> for Cash {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Cash::new(iter)
    }
}

impl Sum for Cash {
    fn sum<I: Iterator<Item = Cash>>(iter: I) -> Self {
        Cash::sum(iter)
    }
}

impl<'a> Sum<&'a Cash> for Cash {
    fn sum<I: Iterator<Item = &'a Cash>>(iter: I) -> Self {
        Cash::sum(iter)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
