//! # User Settings
//!
//! Display and export preferences, persisted as human-readable JSON
//! (`calcdeck.json` by default). Every field has a default, so a partial or
//! missing file is never an error.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::settings::Settings;
//!
//! let settings: Settings = serde_json::from_str(r#"{ "decimal_places": 3 }"#).unwrap();
//! assert_eq!(settings.decimal_places, 3);
//! assert_eq!(settings.currency_symbol, "$");
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::file_io::{read_text, validate_version, write_atomic};

/// Current schema version for settings files
pub const SETTINGS_VERSION: &str = "0.1.0";

/// Default settings file name, looked up in the working directory
pub const SETTINGS_FILE: &str = "calcdeck.json";

/// Unit system for body measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "metric" | "si" | "kg" => Some(UnitSystem::Metric),
            "imperial" | "us" | "lb" => Some(UnitSystem::Imperial),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Decimal places for displayed results
    pub decimal_places: u8,

    /// Symbol prefixed to money values
    pub currency_symbol: String,

    /// Default unit system for the BMI calculator
    pub unit_system: UnitSystem,

    /// Directory that PDF exports are written to
    pub export_dir: PathBuf,

    /// Default log filter (overridden by `RUST_LOG`)
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: SETTINGS_VERSION.to_string(),
            decimal_places: 2,
            currency_symbol: "$".to_string(),
            unit_system: UnitSystem::Metric,
            export_dir: PathBuf::from("."),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let contents = read_text(path)?;
        let settings: Settings =
            serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
                reason: format!("Invalid JSON in {}: {}", path.display(), e),
            })?;
        validate_version(&settings.version, SETTINGS_VERSION)?;
        Ok(settings)
    }

    /// Load from `path` if it exists, otherwise return defaults.
    pub fn load_or_default(path: &Path) -> CalcResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "settings file not found, using defaults");
            Ok(Settings::default())
        }
    }

    /// Save settings with an atomic write.
    pub fn save(&self, path: &Path) -> CalcResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        write_atomic(path, json.as_bytes())
    }

    pub fn number_format(&self) -> NumberFormat {
        NumberFormat {
            decimals: self.decimal_places as usize,
            currency_symbol: self.currency_symbol.clone(),
        }
    }
}

/// Formatting rules applied to every displayed result value.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormat {
    pub decimals: usize,
    pub currency_symbol: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Settings::default().number_format()
    }
}

impl NumberFormat {
    /// Fixed-decimal number with thousands separators.
    pub fn number(&self, value: f64) -> String {
        self.number_with(value, self.decimals)
    }

    /// Like [`number`](Self::number) with an explicit precision.
    pub fn number_with(&self, value: f64, decimals: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let fixed = format!("{:.*}", decimals, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
        let sign = if value < 0.0 && !is_zero { "-" } else { "" };
        match frac_part {
            Some(f) => format!("{}{}.{}", sign, grouped, f),
            None => format!("{}{}", sign, grouped),
        }
    }

    /// Money value: always two decimals, currency prefix.
    pub fn money(&self, value: f64) -> String {
        let body = self.number_with(value.abs(), 2);
        if value < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0') {
            format!("-{}{}", self.currency_symbol, body)
        } else {
            format!("{}{}", self.currency_symbol, body)
        }
    }

    pub fn percent(&self, value: f64) -> String {
        format!("{}%", self.number(value))
    }

    /// Whole number with separators (counts, days, etc.)
    pub fn integer(&self, value: f64) -> String {
        self.number_with(value, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.decimal_places, 2);
        assert_eq!(settings.unit_system, UnitSystem::Metric);
        assert_eq!(settings.version, SETTINGS_VERSION);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "currency_symbol": "€", "unit_system": "imperial" }"#).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.unit_system, UnitSystem::Imperial);
        assert_eq!(settings.decimal_places, 2);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);

        let settings = Settings {
            decimal_places: 4,
            export_dir: PathBuf::from("/tmp/exports"),
            ..Settings::default()
        };
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Settings::load_or_default(&dir.path().join("nope.json")).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_newer_version_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{ "version": "0.9.0" }"#).unwrap();
        let err = Settings::load(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load(&path).unwrap_err().error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_number_formatting() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.number(1234567.891), "1,234,567.89");
        assert_eq!(fmt.number(-0.001), "0.00");
        assert_eq!(fmt.number(-42.5), "-42.50");
        assert_eq!(fmt.number(999.0), "999.00");
        assert_eq!(fmt.integer(1000.0), "1,000");
        assert_eq!(fmt.money(1199.1), "$1,199.10");
        assert_eq!(fmt.money(-5.0), "-$5.00");
        assert_eq!(fmt.percent(15.0), "15.00%");
    }
}
