//! # Currency Codes
//!
//! The canonical key type of a [`Cash`](crate::cash::Cash) mapping.
//!
//! Codes are short symbolic identifiers ("USD", "SEK"). Whatever the caller
//! hands in is trimmed and uppercased once, at the boundary, so `"sek"`,
//! `" SEK "` and `"SEK"` all land on the same key.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Currency code used as the designated currency of [`Cash::zero`](crate::cash::Cash::zero).
pub const ZERO_CURRENCY: &str = "USD";

/// A normalized currency code.
///
/// Ordering is plain lexical ordering of the code, which is what gives
/// `Cash` its canonical iteration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(from = "String", into = "String")]
#[ts(export)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a code, trimming whitespace and uppercasing.
    ///
    /// ## Example
    /// ```rust
    /// use multicash_core::CurrencyCode;
    ///
    /// assert_eq!(CurrencyCode::new(" sek ").as_str(), "SEK");
    /// ```
    pub fn new(code: impl AsRef<str>) -> Self {
        CurrencyCode(code.as_ref().trim().to_uppercase())
    }

    /// Returns the code as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CurrencyCode::new(s))
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        CurrencyCode::new(code)
    }
}

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        CurrencyCode::new(code)
    }
}

impl From<&String> for CurrencyCode {
    fn from(code: &String) -> Self {
        CurrencyCode::new(code)
    }
}

impl From<&CurrencyCode> for CurrencyCode {
    fn from(code: &CurrencyCode) -> Self {
        code.clone()
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `BTreeMap<CurrencyCode, _>::get("SEK")` work for already-canonical codes.
impl Borrow<str> for CurrencyCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CurrencyCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CurrencyCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert_eq!(CurrencyCode::new("usd"), CurrencyCode::new("USD"));
        assert_eq!(CurrencyCode::new("  nok\t").as_str(), "NOK");
    }

    #[test]
    fn test_ordering_is_lexical() {
        let mut codes = vec![
            CurrencyCode::from("USD"),
            CurrencyCode::from("DKK"),
            CurrencyCode::from("SEK"),
        ];
        codes.sort();
        let names: Vec<&str> = codes.iter().map(CurrencyCode::as_str).collect();
        assert_eq!(names, vec!["DKK", "SEK", "USD"]);
    }

    #[test]
    fn test_compares_with_str() {
        assert_eq!(CurrencyCode::from("sek"), "SEK");
        assert_eq!("eur".parse::<CurrencyCode>().unwrap().to_string(), "EUR");
    }

    #[test]
    fn test_serde_normalizes_on_the_way_in() {
        let code: CurrencyCode = serde_json::from_str("\"gbp\"").unwrap();
        assert_eq!(code.as_str(), "GBP");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"GBP\"");
    }
}
