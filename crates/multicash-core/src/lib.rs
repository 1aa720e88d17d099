//! # multicash-core: Multi-Currency Money Values
//!
//! One immutable value, [`Cash`], that can hold balances in several
//! currencies at once, plus well-defined arithmetic over it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        multicash-core                                   │
//! │                                                                         │
//! │   ┌───────────┐     ┌──────────────┐     ┌───────────────┐             │
//! │   │   error   │ ◄── │  arithmetic  │ ──► │     cash      │             │
//! │   │ CashError │     │ Operand, ops │     │ Cash, zero()  │             │
//! │   └───────────┘     └──────────────┘     └───────┬───────┘             │
//! │                                                  │                      │
//! │          ┌──────────────┬────────────────────────┼──────────┐          │
//! │          ▼              ▼                        ▼          ▼          │
//! │     ┌─────────┐   ┌──────────┐            ┌──────────┐ ┌────────┐      │
//! │     │currency │   │  format  │            │  record  │ │ config │      │
//! │     │ codes   │   │ Display  │            │ columns  │ │  toml  │      │
//! │     └─────────┘   └──────────┘            └──────────┘ └────────┘      │
//! │                                                                         │
//! │   NO EXCHANGE RATES • NO SHARED STATE • INTEGER MINOR UNITS            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cash`] - the `Cash` value, predicates and accessors
//! - [`arithmetic`] - `+ - * /`, comparison, operand dispatch
//! - [`currency`] - normalized currency codes
//! - [`error`] - per-operator errors and config errors
//! - [`format`] - display rendering
//! - [`record`] - the amount/currency column pair for persisted records
//! - [`config`] - display and rounding settings
//!
//! ## Example Usage
//!
//! ```rust
//! use multicash_core::{Cash, CashError, Operand};
//!
//! let a = Cash::single("SEK", 100);
//! let b = Cash::single("USD", 100);
//!
//! assert_eq!(&a - &b, Cash::new([("SEK", 100), ("USD", -100)]));
//! assert_eq!(&a * 2, Cash::single("SEK", 200));
//! assert_eq!(a.try_add(Operand::unsupported("symbol")), Err(CashError::Addition));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod arithmetic;
pub mod cash;
pub mod config;
pub mod currency;
pub mod error;
pub mod format;
pub mod record;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use arithmetic::{Operand, Scalar};
pub use cash::{Cash, DEFAULT_ROUND_INTERVAL};
pub use config::{CashConfig, FormatSettings, RoundingSettings};
pub use currency::{CurrencyCode, ZERO_CURRENCY};
pub use error::{CashError, CashResult, ConfigError, ConfigResult};
pub use record::CashColumns;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_has_a_version_number() {
        assert!(!super::VERSION.is_empty());
    }
}
