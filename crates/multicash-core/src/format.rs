//! # Display Formatting
//!
//! Human-readable rendering of [`Cash`]: each entry as
//! `<amount / 100, rounded> <CODE>`, comma-joined in canonical order.
//!
//! ```text
//!   { SEK: 150049, USD: -250 }   →   "1500 SEK, -3 USD"
//!   delimited                    →   "1 500 SEK, -3 USD"
//! ```
//!
//! This is for people, not machines: nothing parses it back.

use std::fmt;
use thousands::{digits, Separable, SeparatorPolicy};

use crate::arithmetic::round_half_away;
use crate::cash::Cash;
use crate::config::FormatSettings;

impl Cash {
    /// Renders with explicit settings.
    ///
    /// `delimited` controls whether `settings.delimiter` groups thousands.
    ///
    /// ## Example
    /// ```rust
    /// use multicash_core::{Cash, FormatSettings};
    ///
    /// let cash = Cash::single("JPY", 1_234_567);
    /// let settings = FormatSettings { minor_units_per_major: 1, delimiter: ",".into() };
    /// assert_eq!(cash.format_with(&settings, true), "1,234,567 JPY");
    /// ```
    pub fn format_with(&self, settings: &FormatSettings, delimited: bool) -> String {
        let divisor = settings.minor_units_per_major.max(1);
        self.iter()
            .map(|(code, amount)| {
                let major = round_half_away(amount, divisor);
                if delimited {
                    let policy = SeparatorPolicy {
                        separator: &settings.delimiter,
                        groups: &[3],
                        digits: digits::ASCII_DECIMAL,
                    };
                    format!("{} {}", major.separate_by_policy(policy), code)
                } else {
                    format!("{} {}", major, code)
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Like `to_string()`, with thousands grouped by a space.
    ///
    /// ## Example
    /// ```rust
    /// use multicash_core::Cash;
    ///
    /// let cash = Cash::new([("SEK", 1_500_000_00), ("USD", 100)]);
    /// assert_eq!(cash.to_delimited_string(), "1 500 000 SEK, 1 USD");
    /// ```
    pub fn to_delimited_string(&self) -> String {
        self.format_with(&FormatSettings::default(), true)
    }
}

impl fmt::Display for Cash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(&FormatSettings::default(), false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Cash::single("SEK", 150_00).to_string(), "150 SEK");
        assert_eq!(
            Cash::new([("USD", 100), ("SEK", 150_00)]).to_string(),
            "150 SEK, 1 USD"
        );
        assert_eq!(Cash::zero().to_string(), "0 USD");
        assert_eq!(Cash::default().to_string(), "");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        assert_eq!(Cash::single("SEK", 150).to_string(), "2 SEK");
        assert_eq!(Cash::single("SEK", 149).to_string(), "1 SEK");
        assert_eq!(Cash::single("SEK", -150).to_string(), "-2 SEK");
    }

    #[test]
    fn test_delimited() {
        assert_eq!(Cash::single("SEK", 1_234_567_89).to_delimited_string(), "1 234 568 SEK");
        assert_eq!(Cash::single("SEK", -1_000_00).to_delimited_string(), "-1 000 SEK");
        assert_eq!(Cash::single("SEK", 999_00).to_delimited_string(), "999 SEK");
    }

    #[test]
    fn test_format_with_custom_delimiter() {
        let settings = FormatSettings {
            minor_units_per_major: 1,
            delimiter: ",".into(),
        };
        assert_eq!(Cash::single("SEK", 0).format_with(&settings, true), "0 SEK");
        assert_eq!(Cash::single("SEK", 1000).format_with(&settings, true), "1,000 SEK");
        assert_eq!(
            Cash::single("SEK", -1_234_567).format_with(&settings, true),
            "-1,234,567 SEK"
        );
        assert_eq!(
            Cash::single("SEK", i64::MIN).format_with(&settings, true),
            "-9,223,372,036,854,775,808 SEK"
        );
        assert_eq!(Cash::single("SEK", 1000).format_with(&settings, false), "1000 SEK");
    }
}
