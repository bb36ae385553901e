//! The `State` trait and the calculator's explicit phase.
//!
//! The calculator is always in exactly one [`Phase`]. The pending operator,
//! the pending operand and the reset-on-next-digit flag are all derived from
//! it, so impossible combinations cannot be represented.

use super::operator::Operator;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are values describing the current position
/// in a state machine.
///
/// # Required Traits
///
/// - `Clone`: snapshots copy the state out of the engine
/// - `PartialEq`: transitions compare states in tests and assertions
/// - `Debug`: states show up in diagnostics
/// - `Serialize` + `Deserialize`: snapshots are handed to front ends as JSON
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Where the calculator is in an operation.
///
/// | phase | pending operator | reset next digit |
/// |---|---|---|
/// | `Idle` | none | no |
/// | `AwaitingOperand` | yes | yes |
/// | `EnteringOperand` | yes | no |
/// | `Result` | none | yes |
/// | `Error` | none | yes |
///
/// # Example
///
/// ```rust
/// use abacus::core::{Operator, Phase, State};
///
/// let phase = Phase::AwaitingOperand {
///     left: "5".to_string(),
///     operator: Operator::Add,
/// };
///
/// assert_eq!(phase.name(), "AwaitingOperand");
/// assert_eq!(phase.pending_operator(), Some(Operator::Add));
/// assert!(phase.resets_on_digit());
/// assert!(!phase.is_final());
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    /// Typing a first operand, or nothing typed yet.
    #[default]
    Idle,

    /// An operator was just chosen; the next digit starts the right operand.
    AwaitingOperand { left: String, operator: Operator },

    /// Typing the right operand of a pending operation.
    EnteringOperand { left: String, operator: Operator },

    /// A result (or a recalled history value) is on display.
    ///
    /// `trace` is the display-only `"5 + 3 ="` line; empty after a recall.
    Result { trace: String },

    /// Division by zero or overflow. The buffer holds the error sentinel.
    Error,
}

impl Phase {
    /// Operator waiting for its right operand, if any.
    pub fn pending_operator(&self) -> Option<Operator> {
        match self {
            Self::AwaitingOperand { operator, .. } | Self::EnteringOperand { operator, .. } => {
                Some(*operator)
            }
            Self::Idle | Self::Result { .. } | Self::Error => None,
        }
    }

    /// Operand captured by the last operator press, or the result trace.
    ///
    /// Empty when nothing is pending.
    pub fn pending_operand(&self) -> &str {
        match self {
            Self::AwaitingOperand { left, .. } | Self::EnteringOperand { left, .. } => left,
            Self::Result { trace } => trace,
            Self::Idle | Self::Error => "",
        }
    }

    /// Whether the next digit replaces the buffer instead of appending.
    pub fn resets_on_digit(&self) -> bool {
        match self {
            Self::AwaitingOperand { .. } | Self::Result { .. } | Self::Error => true,
            Self::Idle | Self::EnteringOperand { .. } => false,
        }
    }
}

impl State for Phase {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::AwaitingOperand { .. } => "AwaitingOperand",
            Self::EnteringOperand { .. } => "EnteringOperand",
            Self::Result { .. } => "Result",
            Self::Error => "Error",
        }
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn awaiting() -> Phase {
        Phase::AwaitingOperand {
            left: "12".to_string(),
            operator: Operator::Multiply,
        }
    }

    fn entering() -> Phase {
        Phase::EnteringOperand {
            left: "12".to_string(),
            operator: Operator::Multiply,
        }
    }

    #[test]
    fn phase_name_returns_correct_value() {
        assert_eq!(Phase::Idle.name(), "Idle");
        assert_eq!(awaiting().name(), "AwaitingOperand");
        assert_eq!(entering().name(), "EnteringOperand");
        assert_eq!(
            Phase::Result {
                trace: String::new()
            }
            .name(),
            "Result"
        );
        assert_eq!(Phase::Error.name(), "Error");
    }

    #[test]
    fn no_phase_is_final() {
        assert!(!Phase::Idle.is_final());
        assert!(!awaiting().is_final());
        assert!(!entering().is_final());
        assert!(!Phase::Error.is_final());
    }

    #[test]
    fn only_error_is_error() {
        assert!(Phase::Error.is_error());
        assert!(!Phase::Idle.is_error());
        assert!(!awaiting().is_error());
    }

    #[test]
    fn derived_flags_follow_the_table() {
        assert_eq!(Phase::Idle.pending_operator(), None);
        assert!(!Phase::Idle.resets_on_digit());

        assert_eq!(awaiting().pending_operator(), Some(Operator::Multiply));
        assert!(awaiting().resets_on_digit());

        assert_eq!(entering().pending_operator(), Some(Operator::Multiply));
        assert!(!entering().resets_on_digit());

        let result = Phase::Result {
            trace: "5 + 3 =".to_string(),
        };
        assert_eq!(result.pending_operator(), None);
        assert!(result.resets_on_digit());
        assert_eq!(result.pending_operand(), "5 + 3 =");

        assert_eq!(Phase::Error.pending_operator(), None);
        assert!(Phase::Error.resets_on_digit());
        assert_eq!(Phase::Error.pending_operand(), "");
    }

    #[test]
    fn pending_operand_is_left_while_operating() {
        assert_eq!(awaiting().pending_operand(), "12");
        assert_eq!(entering().pending_operand(), "12");
        assert_eq!(Phase::Idle.pending_operand(), "");
    }

    #[test]
    fn default_phase_is_idle() {
        assert_eq!(Phase::default(), Phase::Idle);
    }

    #[test]
    fn phase_serializes_with_tag() {
        let json = serde_json::to_string(&awaiting()).unwrap();
        assert!(json.contains("\"phase\":\"awaiting_operand\""));
        let deserialized: Phase = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, awaiting());
    }
}
