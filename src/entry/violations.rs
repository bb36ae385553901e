//! Reasons a keypad token is refused.

use thiserror::Error;

/// Why a token could not be appended to the input buffer.
///
/// Violations are never surfaced to the user; the keypress is ignored.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EntryViolation {
    #[error("Input already contains a decimal point")]
    DuplicatePoint,

    #[error("Digit limit ({limit}) reached (current: {current})")]
    DigitLimitReached { limit: usize, current: usize },

    #[error("Input '{0}' is in exponent form")]
    ExponentForm(String),
}

/// Errors building a token from raw keypad input
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TokenError {
    #[error("'{0}' is not a digit or decimal point")]
    Unrecognised(char),

    #[error("{0} is not a single decimal digit")]
    DigitOutOfRange(u8),
}
