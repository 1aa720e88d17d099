//! # Record Columns
//!
//! Maps one money field of a persisted record onto two scalar columns.
//!
//! ## Column Pair
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  invoices table                                                         │
//! │  ─────────────────────────────────────────────                         │
//! │  total_cents     INTEGER   NULL   ──┐                                  │
//! │  total_currency  TEXT      NULL   ──┴──► CashColumns ──► Option<Cash>  │
//! │                                                                         │
//! │  Either column NULL  →  None  (no value; NOT the same as zero)         │
//! │  Both present        →  Some(Cash::single(currency, cents))            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Writing goes through `Cash::value()` / `Cash::currency()`, so only the
//! first currency of a multi-currency value is stored.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cash::Cash;

/// The `<field>_cents` / `<field>_currency` pair behind one money field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CashColumns {
    /// Amount in minor units.
    pub cents: Option<i64>,

    /// Currency code as stored.
    pub currency: Option<String>,
}

impl CashColumns {
    /// Columns holding `cash`.
    pub fn from_cash(cash: &Cash) -> Self {
        let mut columns = CashColumns::default();
        columns.set(cash);
        columns
    }

    /// Reads the field. `None` if either column is null.
    ///
    /// ## Example
    /// ```rust
    /// use multicash_core::{Cash, CashColumns};
    ///
    /// let columns = CashColumns { cents: Some(1099), currency: Some("sek".into()) };
    /// assert_eq!(columns.to_cash(), Some(Cash::single("SEK", 1099)));
    ///
    /// let missing = CashColumns { cents: Some(0), currency: None };
    /// assert_eq!(missing.to_cash(), None);
    /// ```
    pub fn to_cash(&self) -> Option<Cash> {
        match (&self.currency, self.cents) {
            (Some(currency), Some(cents)) => Some(Cash::single(currency, cents)),
            _ => None,
        }
    }

    /// Writes the field from the first entry of `cash`.
    ///
    /// An empty Cash writes nulls.
    pub fn set(&mut self, cash: &Cash) {
        self.cents = cash.value();
        self.currency = cash.currency().map(|code| code.to_string());
    }

    /// Sets both columns to null.
    pub fn clear(&mut self) {
        self.cents = None;
        self.currency = None;
    }

    /// True if the field holds no value.
    pub fn is_null(&self) -> bool {
        self.to_cash().is_none()
    }
}

impl From<&Cash> for CashColumns {
    fn from(cash: &Cash) -> Self {
        CashColumns::from_cash(cash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A record with one money field, the way callers embed the columns.
    #[derive(Debug, Default)]
    struct Invoice {
        total: CashColumns,
    }

    #[test]
    fn test_null_pair_is_no_value() {
        let invoice = Invoice::default();
        assert!(invoice.total.is_null());
        assert_eq!(invoice.total.to_cash(), None);
    }

    #[test]
    fn test_zero_is_a_value() {
        let columns = CashColumns::from_cash(&Cash::zero());
        assert_eq!(columns.cents, Some(0));
        assert_eq!(columns.currency.as_deref(), Some("USD"));
        assert!(!columns.is_null());
    }

    #[test]
    fn test_write_then_read() {
        let mut invoice = Invoice::default();
        invoice.total.set(&Cash::single("SEK", 150_00));

        assert_eq!(invoice.total.cents, Some(150_00));
        assert_eq!(invoice.total.currency.as_deref(), Some("SEK"));
        assert_eq!(invoice.total.to_cash(), Some(Cash::single("SEK", 150_00)));
    }

    #[test]
    fn test_multi_currency_writes_first_entry() {
        let columns = CashColumns::from(&Cash::new([("USD", 5), ("SEK", 7)]));
        assert_eq!(columns.cents, Some(7));
        assert_eq!(columns.currency.as_deref(), Some("SEK"));
    }

    #[test]
    fn test_empty_cash_writes_nulls() {
        let mut columns = CashColumns::from_cash(&Cash::single("SEK", 1));
        columns.set(&Cash::default());
        assert!(columns.is_null());
        assert_eq!(columns, CashColumns::default());
    }

    #[test]
    fn test_clear() {
        let mut columns = CashColumns::from_cash(&Cash::single("SEK", 1));
        columns.clear();
        assert!(columns.is_null());
    }
}
