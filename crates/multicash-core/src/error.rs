//! # Error Types
//!
//! Error types for multicash-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CashError    - arithmetic with an unsupported right-hand operand      │
//! │  ├── Addition        cash + "wat"                                      │
//! │  ├── Subtraction     cash - "wat"                                      │
//! │  ├── Multiplication  cash * "wat"                                      │
//! │  └── Division        cash / "wat"   (also: division by zero)           │
//! │                                                                         │
//! │  An i64 overflow in an operator reports that operator's variant.       │
//! │                                                                         │
//! │  ConfigError  - loading/saving multicash.toml                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `CashError` carries no payload: the variant alone says which operator
//! failed. A failed operation never leaves a half-built value behind because
//! nothing is mutated in place.

use thiserror::Error;

// =============================================================================
// Cash Error
// =============================================================================

/// Arithmetic failures, one per operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CashError {
    /// Right-hand side of `+` is neither Cash nor a number, or the result
    /// overflows `i64`.
    #[error("unsupported operand type for +")]
    Addition,

    /// Right-hand side of `-` is neither Cash nor a number, or the result
    /// overflows `i64`.
    #[error("unsupported operand type for -")]
    Subtraction,

    /// Right-hand side of `*` is neither Cash nor a number, or the result
    /// overflows `i64`.
    #[error("unsupported operand type for *")]
    Multiplication,

    /// Right-hand side of `/` is neither Cash nor a number, is zero, or the
    /// quotient overflows (`i64::MIN / -1`).
    #[error("unsupported operand type for /")]
    Division,
}

impl CashError {
    /// The operator symbol this error belongs to.
    pub const fn operator(&self) -> &'static str {
        match self {
            CashError::Addition => "+",
            CashError::Subtraction => "-",
            CashError::Multiplication => "*",
            CashError::Division => "/",
        }
    }
}

/// Convenience type alias for Results with CashError.
pub type CashResult<T> = Result<T, CashError>;

// =============================================================================
// Config Error
// =============================================================================

/// Failures while loading, validating or saving [`crate::config::CashConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read or written.
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for this schema.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be rendered as TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A setting is out of its allowed range.
    #[error("Invalid config: {0}")]
    Invalid(String),

    /// No explicit path and no platform config directory.
    #[error("No config path available")]
    NoPath,
}

/// Convenience type alias for Results with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_operator() {
        assert_eq!(
            CashError::Addition.to_string(),
            "unsupported operand type for +"
        );
        assert_eq!(
            CashError::Division.to_string(),
            "unsupported operand type for /"
        );
    }

    #[test]
    fn test_operator_symbols() {
        assert_eq!(CashError::Addition.operator(), "+");
        assert_eq!(CashError::Subtraction.operator(), "-");
        assert_eq!(CashError::Multiplication.operator(), "*");
        assert_eq!(CashError::Division.operator(), "/");
    }

    #[test]
    fn test_config_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ConfigError = io.into();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("Config I/O error"));
    }
}
