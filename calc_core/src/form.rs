//! # Form Fields
//!
//! The text-field model shared by every calculator. Front ends edit fields as
//! strings; calculators parse them with the `parse_*_or` helpers, which fall
//! back to the field's default on text that is not a valid number.

use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::{CalcError, CalcResult};

/// Date format accepted and displayed by date fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// What kind of value a field holds. Front ends use this for hints and
/// input filtering only; parsing happens in the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    Number,
    Integer,
    Date,
    Time,
    Text,
    /// One of a fixed set of values
    Choice(&'static [&'static str]),
}

/// One editable form field with its current text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
    pub kind: FieldKind,
    pub hint: Option<&'static str>,
}

impl Field {
    pub fn new(key: &'static str, label: &'static str, kind: FieldKind, value: impl Into<String>) -> Self {
        Field {
            key,
            label,
            value: value.into(),
            kind,
            hint: None,
        }
    }

    pub fn number(key: &'static str, label: &'static str, value: f64) -> Self {
        Field::new(key, label, FieldKind::Number, trim_float(value))
    }

    pub fn integer(key: &'static str, label: &'static str, value: impl ToString) -> Self {
        Field::new(key, label, FieldKind::Integer, value.to_string())
    }

    pub fn date(key: &'static str, label: &'static str, value: Option<NaiveDate>) -> Self {
        let text = value.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default();
        Field::new(key, label, FieldKind::Date, text).with_hint("YYYY-MM-DD")
    }

    pub fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Next option for a choice field (wraps around); `None` for other kinds.
    pub fn cycle_choice(&self) -> Option<&'static str> {
        match self.kind {
            FieldKind::Choice(options) if !options.is_empty() => {
                let idx = options
                    .iter()
                    .position(|o| o.eq_ignore_ascii_case(&self.value))
                    .map(|i| (i + 1) % options.len())
                    .unwrap_or(0);
                Some(options[idx])
            }
            _ => None,
        }
    }
}

/// Shortest decimal text for a float (`12.0` → `12`, `0.25` → `0.25`).
pub fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Strip thousands separators, currency and percent signs from numeric text.
fn clean_numeric(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '$' | '€' | '£' | '%' | '_' | ' '))
        .collect()
}

/// Parse a float, falling back to `default` on invalid or non-finite text.
///
/// # Example
/// ```rust
/// use calc_core::form::parse_f64_or;
///
/// assert_eq!(parse_f64_or("$250,000", 0.0), 250_000.0);
/// assert_eq!(parse_f64_or("abc", 7.5), 7.5);
/// ```
pub fn parse_f64_or(text: &str, default: f64) -> f64 {
    match clean_numeric(text).parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => default,
    }
}

/// Parse a signed integer, falling back to `default`.
///
/// Accepts integral decimal text such as `"12.0"`.
pub fn parse_i64_or(text: &str, default: i64) -> i64 {
    let cleaned = clean_numeric(text);
    if let Ok(v) = cleaned.parse::<i64>() {
        return v;
    }
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 => v as i64,
        _ => default,
    }
}

/// Parse an unsigned integer, falling back to `default` on invalid or
/// negative text.
pub fn parse_u32_or(text: &str, default: u32) -> u32 {
    u32::try_from(parse_i64_or(text, default as i64)).unwrap_or(default)
}

/// Parse a `YYYY-MM-DD` date. Empty or invalid text is `None`.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

/// Error for a field key the calculator does not know.
pub fn unknown_field(calculator: &str, key: &str) -> CalcError {
    CalcError::invalid_input(key, "", format!("Unknown field for the {} calculator", calculator))
}

/// Parse a `key=value` assignment as given on the command line.
pub fn parse_assignment(text: &str) -> CalcResult<(&str, &str)> {
    text.split_once('=')
        .map(|(k, v)| (k.trim(), v.trim()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| CalcError::invalid_input("set", text, "Expected key=value"))
}
