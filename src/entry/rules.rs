//! Entry rules for appending tokens using Validation.

use crate::entry::token::DigitToken;
use crate::entry::violations::EntryViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Default cap on digits in the input buffer.
pub const DEFAULT_MAX_DIGITS: usize = 9;

/// Count the digits of a buffer, ignoring sign, point and separators.
pub fn digit_count(buffer: &str) -> usize {
    buffer.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Rules a token must satisfy before it is appended to the buffer.
/// Uses Validation to accumulate ALL violations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryRules {
    pub(crate) max_digits: usize,
}

impl Default for EntryRules {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DIGITS)
    }
}

impl EntryRules {
    pub fn new(max_digits: usize) -> Self {
        Self { max_digits }
    }

    pub fn max_digits(&self) -> usize {
        self.max_digits
    }

    /// Check every rule for appending `token` to `buffer`.
    /// Returns Validation::Success(()) if the token may be appended.
    /// Returns Validation::Failure with ALL violations otherwise.
    pub fn check(
        &self,
        buffer: &str,
        token: DigitToken,
    ) -> Validation<(), NonEmptyVec<EntryViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<EntryViolation>>> = Vec::new();

        if token.is_point() {
            let check = if buffer.contains('.') {
                Validation::fail(EntryViolation::DuplicatePoint)
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        // Appending to "1e-7" would edit the exponent, not the number.
        if buffer.contains('e') {
            checks.push(Validation::fail(EntryViolation::ExponentForm(
                buffer.to_string(),
            )));
        }

        let current = digit_count(buffer);
        let check = if current >= self.max_digits {
            Validation::fail(EntryViolation::DigitLimitReached {
                limit: self.max_digits,
                current,
            })
        } else {
            Validation::success(())
        };
        checks.push(check);

        Validation::all_vec(checks).map(|_| ())
    }

    /// Whether `token` may be appended to `buffer`.
    pub fn allows(&self, buffer: &str, token: DigitToken) -> bool {
        self.check(buffer, token).is_success()
    }
}
