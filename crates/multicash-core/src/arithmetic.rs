//! # Arithmetic Engine
//!
//! `+ - * /` and comparison for [`Cash`].
//!
//! ## Operand Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │             cash <op> rhs          rhs is Cash   rhs is number   other  │
//! │  ───────────────────────────────   ───────────   ─────────────   ─────  │
//! │  +   union, sum overlaps           merge         every entry     Err    │
//! │  -   union, missing side = 0       merge         every entry     Err    │
//! │  *   overlaps multiplied           merge         every entry     Err    │
//! │  /   overlaps divided              merge         every entry     Err    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Zero Shortcuts (`+` and `-` only)
//! - no operand → `self`
//! - `x + 0 → x`, `0 + x → x` (Cash operands; the result takes `x`'s currencies)
//! - `x - 0 → x`, `0 - x → -x` (the result takes `x`'s currencies)
//!
//! `*` and `/` never short-circuit: `cash * 0` is every entry set to zero.
//!
//! ## Number Rules
//! - Float intermediates are narrowed with round-half-away-from-zero
//! - Integer division floors (rounds toward negative infinity)
//! - Dividing by zero is a [`CashError::Division`]
//! - Integer overflow is the operator's error, never a wrapped amount
//!
//! The std operators (`&a + &b`, `cash * 2`, `cash / 1.25`) cover every
//! operand that type-checks. Like `i64`, they panic on overflow, and `/`
//! also panics on a zero divisor. The `try_*` methods take an
//! [`Operand`] and report problems as [`CashError`].

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::{Add, Div, Mul, Neg, Sub};
use tracing::{debug, trace};

use crate::cash::Cash;
use crate::error::{CashError, CashResult};

// =============================================================================
// Operands
// =============================================================================

/// A plain number on the right-hand side of an operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

impl Scalar {
    /// True for `0` and `0.0`.
    pub fn is_zero(&self) -> bool {
        match self {
            Scalar::Int(n) => *n == 0,
            Scalar::Float(f) => *f == 0.0,
        }
    }
}

/// Right-hand side of a fallible operation.
///
/// ## Variants
/// - `Cash` - merged entry by entry
/// - `Number` - applied to every entry
/// - `Unsupported` - anything else; rejected with the operator's error.
///   The string names what was passed, for logs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    Cash(&'a Cash),
    Number(Scalar),
    Unsupported(&'a str),
}

impl<'a> Operand<'a> {
    /// Operand for a value the engine cannot work with.
    pub fn unsupported(kind: &'a str) -> Self {
        Operand::Unsupported(kind)
    }

    fn kind(&self) -> &str {
        match self {
            Operand::Cash(_) => "cash",
            Operand::Number(Scalar::Int(_)) => "integer",
            Operand::Number(Scalar::Float(_)) => "float",
            Operand::Unsupported(kind) => kind,
        }
    }
}

impl<'a> From<&'a Cash> for Operand<'a> {
    fn from(cash: &'a Cash) -> Self {
        Operand::Cash(cash)
    }
}

impl From<Scalar> for Operand<'_> {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Float(f) => Operand::from(f),
            Scalar::Int(_) => Operand::Number(scalar),
        }
    }
}

impl From<i64> for Operand<'_> {
    fn from(n: i64) -> Self {
        Operand::Number(Scalar::Int(n))
    }
}

impl From<i32> for Operand<'_> {
    fn from(n: i32) -> Self {
        Operand::Number(Scalar::Int(i64::from(n)))
    }
}

impl From<u32> for Operand<'_> {
    fn from(n: u32) -> Self {
        Operand::Number(Scalar::Int(i64::from(n)))
    }
}

/// NaN and infinities have no integer minor-unit value and are unsupported.
impl From<f64> for Operand<'_> {
    fn from(f: f64) -> Self {
        if f.is_finite() {
            Operand::Number(Scalar::Float(f))
        } else {
            Operand::Unsupported("non-finite float")
        }
    }
}

// =============================================================================
// Numeric Helpers
// =============================================================================

/// Narrows a real-valued intermediate to minor units, halves away from zero.
///
/// Out-of-range values saturate at `i64::MIN`/`i64::MAX`.
#[inline]
pub(crate) fn narrow(value: f64) -> i64 {
    value.round() as i64
}

/// `numerator / denominator` rounded to the nearest integer, halves away
/// from zero. `denominator` must be positive.
pub(crate) fn round_half_away(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator / denominator;
    let remainder = (numerator % denominator).unsigned_abs();
    if remainder >= denominator.unsigned_abs() - remainder {
        quotient + numerator.signum()
    } else {
        quotient
    }
}

/// Integer division rounding toward negative infinity.
///
/// `None` for a zero denominator and for `i64::MIN / -1`.
fn floor_div(numerator: i64, denominator: i64) -> Option<i64> {
    let quotient = numerator.checked_div(denominator)?;
    let remainder = numerator.checked_rem(denominator)?;
    if remainder != 0 && ((numerator < 0) != (denominator < 0)) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}

// =============================================================================
// Merge Primitive
// =============================================================================

/// How keys present on only one side are treated by [`merge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MissingKeys {
    /// Single-sided entries are kept as they are (`+ * /`).
    PassThrough,
    /// Single-sided entries meet a `0` on the other side (`-`).
    Zero,
}

fn merge(
    lhs: &Cash,
    rhs: &Cash,
    missing: MissingKeys,
    mut combine: impl FnMut(i64, i64) -> CashResult<i64>,
) -> CashResult<Cash> {
    let mut merged: BTreeMap<_, _> = lhs.currencies().clone();

    match missing {
        MissingKeys::PassThrough => {
            for (code, b) in rhs.iter() {
                let value = match merged.get(code) {
                    Some(a) => combine(*a, b)?,
                    None => b,
                };
                merged.insert(code.clone(), value);
            }
        }
        MissingKeys::Zero => {
            for value in merged.values_mut() {
                *value = combine(*value, 0)?;
            }
            for (code, b) in rhs.iter() {
                let a = lhs.currencies().get(code).copied().unwrap_or(0);
                merged.insert(code.clone(), combine(a, b)?);
            }
        }
    }

    Ok(Cash::from_map(merged))
}

fn map_scalar(
    cash: &Cash,
    scalar: Scalar,
    on_int: impl Fn(i64, i64) -> CashResult<i64>,
    on_float: impl Fn(f64, f64) -> f64,
) -> CashResult<Cash> {
    let mut mapped = BTreeMap::new();
    for (code, v) in cash.iter() {
        let value = match scalar {
            Scalar::Int(n) => on_int(v, n)?,
            Scalar::Float(f) => narrow(on_float(v as f64, f)),
        };
        mapped.insert(code.clone(), value);
    }
    Ok(Cash::from_map(mapped))
}

// =============================================================================
// Engine
// =============================================================================

impl Cash {
    // -------------------------------------------------------------------------
    // Addition
    // -------------------------------------------------------------------------

    /// `self + rhs`, where `None` means no operand was supplied.
    ///
    /// ## Example
    /// ```rust
    /// use multicash_core::{Cash, CashError, Operand};
    ///
    /// let cash = Cash::single("SEK", 100);
    /// assert_eq!(cash.add_operand(None), Ok(cash.clone()));
    /// assert_eq!(
    ///     cash.add_operand(Some(Operand::unsupported("symbol"))),
    ///     Err(CashError::Addition)
    /// );
    /// ```
    pub fn add_operand(&self, rhs: Option<Operand<'_>>) -> CashResult<Cash> {
        let Some(rhs) = rhs else {
            trace!("no operand for +, returning self");
            return Ok(self.clone());
        };

        match rhs {
            Operand::Cash(other) => self.add_cash(other),
            Operand::Number(scalar) => self.add_scalar(scalar),
            Operand::Unsupported(_) => Err(reject(CashError::Addition, &rhs)),
        }
    }

    /// `self + rhs`.
    pub fn try_add<'a>(&self, rhs: impl Into<Operand<'a>>) -> CashResult<Cash> {
        self.add_operand(Some(rhs.into()))
    }

    fn add_cash(&self, other: &Cash) -> CashResult<Cash> {
        if other.is_zero() {
            return Ok(self.clone());
        }
        if self.is_zero() {
            trace!("zero + cash, adopting right-hand currencies");
            return Ok(other.clone());
        }
        merge(self, other, MissingKeys::PassThrough, |a, b| {
            checked(a.checked_add(b), CashError::Addition)
        })
    }

    fn add_scalar(&self, scalar: Scalar) -> CashResult<Cash> {
        if scalar.is_zero() {
            return Ok(self.clone());
        }
        map_scalar(
            self,
            scalar,
            |v, n| checked(v.checked_add(n), CashError::Addition),
            |v, f| v + f,
        )
    }

    // -------------------------------------------------------------------------
    // Subtraction
    // -------------------------------------------------------------------------

    /// `self - rhs`, where `None` means no operand was supplied.
    ///
    /// Currencies missing on either side count as zero, so the result holds
    /// every currency of both operands.
    ///
    /// ## Example
    /// ```rust
    /// use multicash_core::Cash;
    ///
    /// let sek = Cash::single("SEK", 100);
    /// let usd = Cash::single("USD", 100);
    /// assert_eq!(
    ///     sek.try_sub(&usd),
    ///     Ok(Cash::new([("SEK", 100), ("USD", -100)]))
    /// );
    /// ```
    pub fn sub_operand(&self, rhs: Option<Operand<'_>>) -> CashResult<Cash> {
        let Some(rhs) = rhs else {
            trace!("no operand for -, returning self");
            return Ok(self.clone());
        };

        match rhs {
            Operand::Cash(other) => self.sub_cash(other),
            Operand::Number(scalar) => self.sub_scalar(scalar),
            Operand::Unsupported(_) => Err(reject(CashError::Subtraction, &rhs)),
        }
    }

    /// `self - rhs`.
    pub fn try_sub<'a>(&self, rhs: impl Into<Operand<'a>>) -> CashResult<Cash> {
        self.sub_operand(Some(rhs.into()))
    }

    fn sub_cash(&self, other: &Cash) -> CashResult<Cash> {
        if other.is_zero() {
            return Ok(self.clone());
        }
        if self.is_zero() {
            trace!("zero - cash, negating right-hand side");
            return merge(&Cash::default(), other, MissingKeys::Zero, |a, b| {
                checked(a.checked_sub(b), CashError::Subtraction)
            });
        }
        merge(self, other, MissingKeys::Zero, |a, b| {
            checked(a.checked_sub(b), CashError::Subtraction)
        })
    }

    fn sub_scalar(&self, scalar: Scalar) -> CashResult<Cash> {
        if scalar.is_zero() {
            return Ok(self.clone());
        }
        map_scalar(
            self,
            scalar,
            |v, n| checked(v.checked_sub(n), CashError::Subtraction),
            |v, f| v - f,
        )
    }

    // -------------------------------------------------------------------------
    // Multiplication
    // -------------------------------------------------------------------------

    /// `self * rhs`.
    ///
    /// With a Cash operand, currencies found on one side only pass through.
    ///
    /// ## Example
    /// ```rust
    /// use multicash_core::Cash;
    ///
    /// let cash = Cash::new([("SEK", 100), ("USD", 100)]);
    /// assert_eq!(cash.try_mul(1.25), Ok(Cash::new([("SEK", 125), ("USD", 125)])));
    /// ```
    pub fn try_mul<'a>(&self, rhs: impl Into<Operand<'a>>) -> CashResult<Cash> {
        let rhs = rhs.into();
        match rhs {
            Operand::Cash(other) => self.mul_cash(other),
            Operand::Number(scalar) => self.mul_scalar(scalar),
            Operand::Unsupported(_) => Err(reject(CashError::Multiplication, &rhs)),
        }
    }

    fn mul_cash(&self, other: &Cash) -> CashResult<Cash> {
        merge(self, other, MissingKeys::PassThrough, |a, b| {
            checked(a.checked_mul(b), CashError::Multiplication)
        })
    }

    fn mul_scalar(&self, scalar: Scalar) -> CashResult<Cash> {
        map_scalar(
            self,
            scalar,
            |v, n| checked(v.checked_mul(n), CashError::Multiplication),
            |v, f| v * f,
        )
    }

    // -------------------------------------------------------------------------
    // Division
    // -------------------------------------------------------------------------

    /// `self / rhs`.
    ///
    /// Fails with [`CashError::Division`] for an unsupported operand, a zero
    /// number, or a zero entry that overlaps one of `self`'s currencies.
    ///
    /// ## Example
    /// ```rust
    /// use multicash_core::{Cash, CashError};
    ///
    /// let cash = Cash::new([("SEK", 100), ("USD", 100)]);
    /// assert_eq!(cash.try_div(1.25), Ok(Cash::new([("SEK", 80), ("USD", 80)])));
    /// assert_eq!(cash.try_div(0), Err(CashError::Division));
    /// ```
    pub fn try_div<'a>(&self, rhs: impl Into<Operand<'a>>) -> CashResult<Cash> {
        let rhs = rhs.into();
        match rhs {
            Operand::Cash(other) => merge(self, other, MissingKeys::PassThrough, checked_floor_div),
            Operand::Number(scalar) if scalar.is_zero() => {
                debug!(operator = "/", "division by zero");
                Err(CashError::Division)
            }
            Operand::Number(scalar) => map_scalar(self, scalar, checked_floor_div, |v, f| v / f),
            Operand::Unsupported(_) => Err(reject(CashError::Division, &rhs)),
        }
    }

    // -------------------------------------------------------------------------
    // Comparison
    // -------------------------------------------------------------------------

    /// Compares [`Cash::total`] against a number or another Cash's total.
    ///
    /// Currency identity is ignored: `100 SEK` is less than `200 USD`. This is
    /// a magnitude ordering, not an exchange-rate comparison, and it is looser
    /// than `==`. Returns `None` for unsupported operands and NaN.
    ///
    /// ## Example
    /// ```rust
    /// use multicash_core::Cash;
    /// use std::cmp::Ordering;
    ///
    /// let sek = Cash::single("SEK", 100);
    /// let usd = Cash::single("USD", 200);
    /// assert_eq!(sek.compare(&usd), Some(Ordering::Less));
    /// assert_eq!(sek.compare(80), Some(Ordering::Greater));
    /// ```
    pub fn compare<'a>(&self, rhs: impl Into<Operand<'a>>) -> Option<Ordering> {
        let total = self.total();
        match rhs.into() {
            Operand::Cash(other) => Some(total.cmp(&other.total())),
            Operand::Number(Scalar::Int(n)) => Some(total.cmp(&n)),
            Operand::Number(Scalar::Float(f)) => (total as f64).partial_cmp(&f),
            Operand::Unsupported(_) => None,
        }
    }

    /// `compare(rhs) == Some(Greater)`.
    pub fn is_greater_than<'a>(&self, rhs: impl Into<Operand<'a>>) -> bool {
        self.compare(rhs) == Some(Ordering::Greater)
    }

    /// `compare(rhs) == Some(Less)`.
    pub fn is_less_than<'a>(&self, rhs: impl Into<Operand<'a>>) -> bool {
        self.compare(rhs) == Some(Ordering::Less)
    }
}

fn checked_floor_div(numerator: i64, denominator: i64) -> CashResult<i64> {
    if denominator == 0 {
        debug!(operator = "/", "division by zero entry");
        return Err(CashError::Division);
    }
    checked(floor_div(numerator, denominator), CashError::Division)
}

fn checked(value: Option<i64>, error: CashError) -> CashResult<i64> {
    value.ok_or_else(|| {
        debug!(operator = error.operator(), "i64 overflow");
        error
    })
}

fn reject(error: CashError, rhs: &Operand<'_>) -> CashError {
    debug!(operator = error.operator(), operand = rhs.kind(), "unsupported operand");
    error
}

// Std operators panic where `i64` would; the `try_*` methods return the error.
fn or_panic(result: CashResult<Cash>, message: &str) -> Cash {
    match result {
        Ok(cash) => cash,
        Err(_) => panic!("{}", message),
    }
}

// =============================================================================
// Std Operators
// =============================================================================

impl Neg for &Cash {
    type Output = Cash;

    fn neg(self) -> Cash {
        self.map_amounts(|v| -v)
    }
}

impl Neg for Cash {
    type Output = Cash;

    fn neg(self) -> Cash {
        -&self
    }
}

impl Add<&Cash> for &Cash {
    type Output = Cash;

    fn add(self, rhs: &Cash) -> Cash {
        or_panic(self.add_cash(rhs), "attempt to add Cash with overflow")
    }
}

impl Sub<&Cash> for &Cash {
    type Output = Cash;

    fn sub(self, rhs: &Cash) -> Cash {
        or_panic(self.sub_cash(rhs), "attempt to subtract Cash with overflow")
    }
}

impl Mul<&Cash> for &Cash {
    type Output = Cash;

    fn mul(self, rhs: &Cash) -> Cash {
        or_panic(self.mul_cash(rhs), "attempt to multiply Cash with overflow")
    }
}

/// # Panics
/// If `rhs` holds a zero for a currency `self` also holds, or a quotient
/// overflows.
impl Div<&Cash> for &Cash {
    type Output = Cash;

    fn div(self, rhs: &Cash) -> Cash {
        or_panic(self.try_div(rhs), "attempt to divide Cash by a zero entry or with overflow")
    }
}

macro_rules! scalar_ops {
    ($t:ty, $variant:ident, $conv:expr) => {
        impl Add<$t> for &Cash {
            type Output = Cash;

            fn add(self, rhs: $t) -> Cash {
                or_panic(
                    self.add_scalar(Scalar::$variant($conv(rhs))),
                    "attempt to add to Cash with overflow",
                )
            }
        }

        impl Sub<$t> for &Cash {
            type Output = Cash;

            fn sub(self, rhs: $t) -> Cash {
                or_panic(
                    self.sub_scalar(Scalar::$variant($conv(rhs))),
                    "attempt to subtract from Cash with overflow",
                )
            }
        }

        impl Mul<$t> for &Cash {
            type Output = Cash;

            fn mul(self, rhs: $t) -> Cash {
                or_panic(
                    self.mul_scalar(Scalar::$variant($conv(rhs))),
                    "attempt to multiply Cash with overflow",
                )
            }
        }

        /// # Panics
        /// If `rhs` is zero, or a quotient overflows.
        impl Div<$t> for &Cash {
            type Output = Cash;

            fn div(self, rhs: $t) -> Cash {
                let scalar = Scalar::$variant($conv(rhs));
                if scalar.is_zero() {
                    panic!("attempt to divide Cash by zero");
                }
                or_panic(
                    map_scalar(self, scalar, checked_floor_div, |v, f| v / f),
                    "attempt to divide Cash with overflow",
                )
            }
        }
    };
}

scalar_ops!(i64, Int, i64::from);
scalar_ops!(i32, Int, i64::from);
scalar_ops!(f64, Float, f64::from);

// Owned forms delegate to the borrowed impls above.
macro_rules! forward_owned {
    ($($trait:ident, $method:ident, $rhs:ty;)*) => {
        $(
            impl $trait<$rhs> for Cash {
                type Output = Cash;

                fn $method(self, rhs: $rhs) -> Cash {
                    (&self).$method(rhs)
                }
            }
        )*
    };
}

forward_owned! {
    Add, add, &Cash;
    Sub, sub, &Cash;
    Mul, mul, &Cash;
    Div, div, &Cash;
    Add, add, i64;
    Sub, sub, i64;
    Mul, mul, i64;
    Div, div, i64;
    Add, add, i32;
    Sub, sub, i32;
    Mul, mul, i32;
    Div, div, i32;
    Add, add, f64;
    Sub, sub, f64;
    Mul, mul, f64;
    Div, div, f64;
}

macro_rules! forward_owned_cash_rhs {
    ($($trait:ident, $method:ident;)*) => {
        $(
            impl $trait<Cash> for Cash {
                type Output = Cash;

                fn $method(self, rhs: Cash) -> Cash {
                    (&self).$method(&rhs)
                }
            }

            impl $trait<Cash> for &Cash {
                type Output = Cash;

                fn $method(self, rhs: Cash) -> Cash {
                    self.$method(&rhs)
                }
            }
        )*
    };
}

forward_owned_cash_rhs! {
    Add, add;
    Sub, sub;
    Mul, mul;
    Div, div;
}

// =============================================================================
// Unit Tests
// =============================================================================
