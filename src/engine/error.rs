//! Build errors for calculator configuration.

use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("History capacity must be at least 1")]
    ZeroHistoryCapacity,

    #[error("Digit limit must be at least 1")]
    ZeroDigitLimit,

    #[error("Significant digits must be between 1 and 17 (requested: {requested})")]
    PrecisionOutOfRange { requested: usize },
}
