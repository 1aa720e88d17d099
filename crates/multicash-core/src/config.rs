//! # Cash Configuration
//!
//! Display and rounding settings for callers that render or round Cash.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     MULTICASH_MINOR_UNITS=100                                          │
//! │     MULTICASH_DELIMITER=","                                            │
//! │     MULTICASH_ROUND_INTERVAL=500                                       │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/multicash/multicash.toml (Linux)                         │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     100 minor units per major, " " delimiter, interval 100             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here changes how `Cash` itself behaves: `Display`, `Cash::zero()`
//! and `Cash::round_default()` are fixed. Settings only feed
//! [`Cash::format_with`](crate::cash::Cash::format_with) and explicit
//! `cash.round(config.rounding.interval)` calls.
//!
//! ## Configuration File Format
//! ```toml
//! [format]
//! minor_units_per_major = 100
//! delimiter = " "
//!
//! [rounding]
//! interval = 100
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::cash::DEFAULT_ROUND_INTERVAL;
use crate::error::{ConfigError, ConfigResult};

// =============================================================================
// Format Settings
// =============================================================================

/// How amounts are rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatSettings {
    /// Minor units in one displayed unit (100 for cents → dollars).
    #[serde(default = "default_minor_units")]
    pub minor_units_per_major: i64,

    /// Thousands separator used by delimited rendering.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

fn default_minor_units() -> i64 {
    100
}

fn default_delimiter() -> String {
    " ".to_string()
}

impl Default for FormatSettings {
    fn default() -> Self {
        FormatSettings {
            minor_units_per_major: default_minor_units(),
            delimiter: default_delimiter(),
        }
    }
}

// =============================================================================
// Rounding Settings
// =============================================================================

/// Interval used when a caller rounds with configured settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundingSettings {
    #[serde(default = "default_interval")]
    pub interval: u32,
}

fn default_interval() -> u32 {
    DEFAULT_ROUND_INTERVAL
}

impl Default for RoundingSettings {
    fn default() -> Self {
        RoundingSettings {
            interval: default_interval(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete multicash configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashConfig {
    #[serde(default)]
    pub format: FormatSettings,

    #[serde(default)]
    pub rounding: RoundingSettings,
}

impl CashConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (multicash.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading multicash config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load multicash config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(ConfigError::NoPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Multicash config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.format.minor_units_per_major <= 0 {
            return Err(ConfigError::Invalid(format!(
                "minor_units_per_major must be greater than 0, got {}",
                self.format.minor_units_per_major
            )));
        }

        if self.rounding.interval == 0 {
            return Err(ConfigError::Invalid(
                "rounding interval must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies overrides from a variable lookup (the process environment
    /// in [`CashConfig::load`]).
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(units) = lookup("MULTICASH_MINOR_UNITS") {
            match units.parse::<i64>() {
                Ok(n) => {
                    debug!(minor_units = n, "Overriding minor units from environment");
                    self.format.minor_units_per_major = n;
                }
                Err(_) => warn!(value = %units, "Ignoring non-numeric MULTICASH_MINOR_UNITS"),
            }
        }

        if let Some(delimiter) = lookup("MULTICASH_DELIMITER") {
            self.format.delimiter = delimiter;
        }

        if let Some(interval) = lookup("MULTICASH_ROUND_INTERVAL") {
            match interval.parse::<u32>() {
                Ok(n) => {
                    debug!(interval = n, "Overriding rounding interval from environment");
                    self.rounding.interval = n;
                }
                Err(_) => warn!(value = %interval, "Ignoring invalid MULTICASH_ROUND_INTERVAL"),
            }
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "multicash", "multicash")
            .map(|dirs| dirs.config_dir().join("multicash.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = CashConfig::default();
        assert_eq!(config.format.minor_units_per_major, 100);
        assert_eq!(config.format.delimiter, " ");
        assert_eq!(config.rounding.interval, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: CashConfig = toml::from_str("[rounding]\ninterval = 500\n").unwrap();
        assert_eq!(config.rounding.interval, 500);
        assert_eq!(config.format, FormatSettings::default());
    }

    #[test]
    fn test_config_validation() {
        let mut config = CashConfig::default();
        config.format.minor_units_per_major = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.format.minor_units_per_major = 100;
        config.rounding.interval = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("MULTICASH_MINOR_UNITS", "1000"),
            ("MULTICASH_DELIMITER", ","),
            ("MULTICASH_ROUND_INTERVAL", "oops"),
        ]
        .into_iter()
        .collect();

        let mut config = CashConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.format.minor_units_per_major, 1000);
        assert_eq!(config.format.delimiter, ",");
        // Unparseable values are ignored.
        assert_eq!(config.rounding.interval, 100);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir()
            .join(format!("multicash-config-test-{}", std::process::id()))
            .join("multicash.toml");

        let mut config = CashConfig::default();
        config.rounding.interval = 50;
        config.save(Some(path.clone())).unwrap();

        let loaded = CashConfig::load(Some(path.clone())).unwrap();
        assert_eq!(loaded.rounding.interval, 50);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let path = std::env::temp_dir()
            .join(format!("multicash-bad-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[rounding]\ninterval = \"soon\"\n").unwrap();

        assert!(matches!(
            CashConfig::load(Some(path.clone())),
            Err(ConfigError::Parse(_))
        ));
        assert_eq!(
            CashConfig::load_or_default(Some(path.clone())),
            CashConfig::default()
        );

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&CashConfig::default()).unwrap();
        assert!(toml_str.contains("[format]"));
        assert!(toml_str.contains("[rounding]"));
    }
}
