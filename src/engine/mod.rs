//! The calculator engine.
//!
//! [`Calculator`] owns the input buffer, the current [`Phase`] and the
//! history. Every transition runs to completion and never fails: division by
//! zero surfaces as the `"Error"` sentinel and refused keypresses are ignored.
//!
//! # Example
//!
//! ```rust
//! use abacus::core::Operator;
//! use abacus::engine::Calculator;
//! use abacus::entry::DigitToken;
//!
//! let mut calculator = Calculator::new();
//! calculator.digit_entry(DigitToken::digit(5).unwrap());
//! calculator.operator_press(Operator::Add);
//! calculator.digit_entry(DigitToken::digit(3).unwrap());
//! calculator.compute();
//!
//! assert_eq!(calculator.input(), "8");
//! assert_eq!(calculator.pending_operand(), "5 + 3 =");
//! assert_eq!(calculator.history().entries()[0].expression, "5 + 3");
//! ```

mod builder;
mod error;
mod key;

pub use builder::{CalculatorBuilder, DEFAULT_SIGNIFICANT_DIGITS, MAX_SIGNIFICANT_DIGITS};
pub use error::BuildError;
pub use key::Key;

use crate::core::{
    canonical, parse_operand, round_significant, strip_separators, HistoryEntry, HistoryLog,
    Operator, Phase, State, ERROR_SENTINEL,
};
use crate::display::format_for_display;
use crate::entry::{DigitToken, EntryRules};
use crate::snapshot::Snapshot;
use stillwater::validation::Validation;
use uuid::Uuid;

/// Calculator input state machine.
#[derive(Clone, Debug)]
pub struct Calculator {
    input: String,
    phase: Phase,
    history: HistoryLog,
    rules: EntryRules,
    significant_digits: usize,
}

impl Calculator {
    /// Create a calculator with the standard limits.
    pub fn new() -> Self {
        Self::from_parts(
            EntryRules::default(),
            HistoryLog::new(),
            DEFAULT_SIGNIFICANT_DIGITS,
        )
    }

    /// Start configuring a calculator.
    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::new()
    }

    pub(crate) fn from_parts(
        rules: EntryRules,
        history: HistoryLog,
        significant_digits: usize,
    ) -> Self {
        Self {
            input: "0".to_string(),
            phase: Phase::Idle,
            history,
            rules,
            significant_digits,
        }
    }

    /// Dispatch a keypad key to its transition.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(token) => self.digit_entry(token),
            Key::Operator(op) => self.operator_press(op),
            Key::Equals => self.compute(),
            Key::Clear => self.clear(),
            Key::Percent => self.percent(),
            Key::ToggleSign => self.toggle_sign(),
        }
    }

    /// Enter a digit or the decimal point.
    ///
    /// Replaces the buffer after an operator, a result or an error; replaces
    /// a lone `"0"`; otherwise appends if the entry rules allow it.
    pub fn digit_entry(&mut self, token: DigitToken) {
        if self.phase.resets_on_digit() {
            self.input = if token.is_point() {
                "0.".to_string()
            } else {
                token.to_string()
            };
            self.phase = match std::mem::take(&mut self.phase) {
                Phase::AwaitingOperand { left, operator } => {
                    Phase::EnteringOperand { left, operator }
                }
                _ => Phase::Idle,
            };
            tracing::trace!(phase = self.phase.name(), input = %self.input, "Started new entry");
            return;
        }

        if self.input == "0" && !token.is_point() {
            self.input = token.to_string();
            return;
        }

        if let Validation::Failure(violations) = self.rules.check(&self.input, token) {
            let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
            tracing::trace!(
                token = %token,
                input = %self.input,
                reasons = ?reasons,
                "Entry ignored"
            );
            return;
        }

        self.input.push(token.as_char());
    }

    /// Choose an operator.
    ///
    /// Folds a pending operation first when a right operand has been typed,
    /// so `5 + 3 ×` shows `8` and waits for the multiplier. Pressing another
    /// operator straight away only swaps the pending one. Ignored while the
    /// buffer holds the error sentinel.
    pub fn operator_press(&mut self, operator: Operator) {
        if matches!(self.phase, Phase::EnteringOperand { .. }) {
            self.compute();
        }

        if self.phase.is_error() {
            tracing::debug!(operator = %operator, "Operator ignored while showing error");
            return;
        }

        self.phase = Phase::AwaitingOperand {
            left: strip_separators(&self.input),
            operator,
        };
        tracing::debug!(operator = %operator, left = %self.input, "Operator pending");
    }

    /// Apply the pending operator (`=`).
    ///
    /// No-op without a pending operator, so a second `=` does nothing.
    pub fn compute(&mut self) {
        let (left, operator) = match &self.phase {
            Phase::AwaitingOperand { left, operator }
            | Phase::EnteringOperand { left, operator } => (left.clone(), *operator),
            Phase::Idle | Phase::Result { .. } | Phase::Error => return,
        };
        if left.is_empty() {
            return;
        }

        let operands = parse_operand(&left)
            .and_then(|previous| parse_operand(&self.input).map(|current| (previous, current)));
        let (previous, current) = match operands {
            Ok(operands) => operands,
            Err(err) => {
                tracing::warn!(error = %err, "Pending operation skipped");
                return;
            }
        };

        let digits = self.significant_digits;
        let value = operator
            .apply(previous, current)
            .map(|raw| round_significant(raw, digits))
            .filter(|rounded| rounded.is_finite());

        let Some(value) = value else {
            tracing::debug!(
                operator = %operator,
                previous = previous,
                current = current,
                "Calculation failed"
            );
            self.input = ERROR_SENTINEL.to_string();
            self.phase = Phase::Error;
            return;
        };

        let expression = format!(
            "{} {} {}",
            format_for_display(&canonical(previous)),
            operator,
            format_for_display(&canonical(current))
        );
        let result = canonical(value);

        self.history = self
            .history
            .record(HistoryEntry::new(expression.clone(), result.clone()));
        tracing::debug!(expression = %expression, result = %result, "Computed");

        self.input = result;
        self.phase = Phase::Result {
            trace: format!("{expression} ="),
        };
    }

    /// `AC`: reset the buffer and any pending operation. History is kept.
    pub fn clear(&mut self) {
        self.input = "0".to_string();
        self.phase = Phase::Idle;
        tracing::debug!("Cleared");
    }

    /// Drop every history entry.
    pub fn clear_history(&mut self) {
        self.history = self.history.cleared();
        tracing::debug!("History cleared");
    }

    /// Put a stored result back into the buffer.
    ///
    /// Separators are stripped. Any pending operation is discarded so the
    /// next operator starts from the recalled value. Values that do not parse
    /// are ignored.
    pub fn reuse_history_result(&mut self, result: &str) {
        let value = strip_separators(result);
        if let Err(err) = parse_operand(&value) {
            tracing::warn!(error = %err, "History result not reused");
            return;
        }

        self.input = value;
        self.phase = Phase::Result {
            trace: String::new(),
        };
        tracing::debug!(input = %self.input, "Reused history result");
    }

    /// Reuse the result of the history entry with `id`.
    ///
    /// Returns `false` when no such entry exists.
    pub fn reuse_history_entry(&mut self, id: Uuid) -> bool {
        let Some(result) = self.history.find(id).map(|entry| entry.result.clone()) else {
            return false;
        };
        self.reuse_history_result(&result);
        true
    }

    /// Divide the buffer by 100. Phase is unchanged.
    pub fn percent(&mut self) {
        self.map_input(|value| value / 100.0);
    }

    /// Negate the buffer. Phase is unchanged.
    pub fn toggle_sign(&mut self) {
        self.map_input(|value| value * -1.0);
    }

    fn map_input(&mut self, f: impl FnOnce(f64) -> f64) {
        match parse_operand(&self.input) {
            Ok(value) => self.input = canonical(f(value)),
            Err(err) => tracing::trace!(error = %err, "Input left unchanged"),
        }
    }

    /// Number currently typed or displayed, without separators.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Input formatted for rendering.
    pub fn display_input(&self) -> String {
        format_for_display(&self.input)
    }

    /// Left operand of the pending operation, or the last result trace.
    pub fn pending_operand(&self) -> &str {
        self.phase.pending_operand()
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.phase.pending_operator()
    }

    /// Whether the next digit replaces the buffer.
    pub fn reset_next(&self) -> bool {
        self.phase.resets_on_digit()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn rules(&self) -> &EntryRules {
        &self.rules
    }

    pub fn significant_digits(&self) -> usize {
        self.significant_digits
    }

    /// Copy the renderable state out of the engine.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            input: self.input.clone(),
            pending_operand: self.phase.pending_operand().to_string(),
            pending_operator: self.phase.pending_operator(),
            reset_next: self.phase.resets_on_digit(),
            phase: self.phase.clone(),
            history: self.history.clone(),
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
