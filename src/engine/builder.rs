//! Builder for configuring a calculator.

use crate::core::{HistoryLog, DEFAULT_HISTORY_CAPACITY};
use crate::engine::error::BuildError;
use crate::engine::Calculator;
use crate::entry::{EntryRules, DEFAULT_MAX_DIGITS};

/// Default number of significant digits results are rounded to.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 10;

/// Most significant digits an `f64` can carry meaningfully.
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Builder for constructing calculators with a fluent API.
///
/// # Example
///
/// ```rust
/// use abacus::engine::CalculatorBuilder;
///
/// let calculator = CalculatorBuilder::new()
///     .max_digits(12)
///     .history_capacity(50)
///     .build()
///     .unwrap();
///
/// assert_eq!(calculator.history().capacity(), 50);
/// ```
#[derive(Clone, Debug)]
pub struct CalculatorBuilder {
    max_digits: usize,
    history_capacity: usize,
    significant_digits: usize,
}

impl CalculatorBuilder {
    /// Create a builder with the standard keypad limits.
    pub fn new() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DIGITS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
        }
    }

    /// Set how many digits the input buffer accepts.
    pub fn max_digits(mut self, n: usize) -> Self {
        self.max_digits = n;
        self
    }

    /// Set how many history entries are kept.
    pub fn history_capacity(mut self, n: usize) -> Self {
        self.history_capacity = n;
        self
    }

    /// Set the significant digits results are rounded to.
    pub fn significant_digits(mut self, n: usize) -> Self {
        self.significant_digits = n;
        self
    }

    /// Build the calculator.
    /// Returns an error if a limit is out of range.
    pub fn build(self) -> Result<Calculator, BuildError> {
        if self.max_digits == 0 {
            return Err(BuildError::ZeroDigitLimit);
        }
        if self.history_capacity == 0 {
            return Err(BuildError::ZeroHistoryCapacity);
        }
        if !(1..=MAX_SIGNIFICANT_DIGITS).contains(&self.significant_digits) {
            return Err(BuildError::PrecisionOutOfRange {
                requested: self.significant_digits,
            });
        }

        Ok(Calculator::from_parts(
            EntryRules::new(self.max_digits),
            HistoryLog::with_capacity(self.history_capacity),
            self.significant_digits,
        ))
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_standard_keypad() {
        let calculator = CalculatorBuilder::new().build().unwrap();

        assert_eq!(calculator.rules().max_digits(), 9);
        assert_eq!(calculator.history().capacity(), 20);
        assert_eq!(calculator.significant_digits(), 10);
        assert_eq!(calculator.input(), "0");
    }

    #[test]
    fn builder_validates_digit_limit() {
        let result = CalculatorBuilder::new().max_digits(0).build();

        assert!(matches!(result, Err(BuildError::ZeroDigitLimit)));
    }

    #[test]
    fn builder_validates_history_capacity() {
        let result = CalculatorBuilder::new().history_capacity(0).build();

        assert!(matches!(result, Err(BuildError::ZeroHistoryCapacity)));
    }

    #[test]
    fn builder_validates_precision() {
        let too_low = CalculatorBuilder::new().significant_digits(0).build();
        let too_high = CalculatorBuilder::new().significant_digits(18).build();

        assert_eq!(
            too_low.err(),
            Some(BuildError::PrecisionOutOfRange { requested: 0 })
        );
        assert_eq!(
            too_high.err(),
            Some(BuildError::PrecisionOutOfRange { requested: 18 })
        );
    }

    #[test]
    fn fluent_api_builds_calculator() {
        let calculator = CalculatorBuilder::new()
            .max_digits(4)
            .history_capacity(2)
            .significant_digits(6)
            .build();

        assert!(calculator.is_ok());
        let calculator = calculator.unwrap();
        assert_eq!(calculator.rules().max_digits(), 4);
        assert_eq!(calculator.history().capacity(), 2);
        assert_eq!(calculator.significant_digits(), 6);
    }
}
