//! Canonical numeric strings.
//!
//! All arithmetic goes through these helpers: separators are stripped before
//! parsing and results are rendered back into a canonical, unseparated form.
//! Display formatting lives in [`crate::display`] and never feeds back here.

use thiserror::Error;

/// Thousands separator inserted by the display layer.
pub const SEPARATOR: char = ',';

/// Buffer contents after a division by zero or an overflow.
pub const ERROR_SENTINEL: &str = "Error";

/// Errors produced when a buffer cannot be read as a number
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NumberError {
    #[error("'{0}' is not a finite decimal number")]
    Unparseable(String),
}

/// Remove display separators from a numeric string.
pub fn strip_separators(value: &str) -> String {
    value.chars().filter(|c| *c != SEPARATOR).collect()
}

/// Parse a buffer or operand as a finite decimal.
///
/// Separators are stripped first. A trailing point (`"5."`) is accepted.
pub fn parse_operand(value: &str) -> Result<f64, NumberError> {
    let stripped = strip_separators(value);
    stripped
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| NumberError::Unparseable(value.to_string()))
}

/// Round to `digits` significant decimal digits.
///
/// Used to hide binary floating-point noise (`0.1 + 0.2`), not to limit
/// precision further than the display needs.
pub fn round_significant(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    let precision = digits.saturating_sub(1);
    format!("{value:.precision$e}")
        .parse::<f64>()
        .unwrap_or(value)
}

/// Render a finite value as its canonical decimal string.
///
/// Shortest round-trip digits, positional between `1e-6` and `1e21` and
/// exponent form (`1e+21`, `1.5e-7`) outside. Negative zero renders as `"0"`.
pub fn canonical(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&value.abs()) {
        value.to_string()
    } else {
        exponent_form(value)
    }
}

fn exponent_form(value: f64) -> String {
    let raw = format!("{value:e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => raw,
    }
}
