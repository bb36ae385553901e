//! The four binary operators the keypad offers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pending binary operator.
///
/// Operators are applied left to right with the pending operand on the left
/// and the input buffer on the right: `previous OP current`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Every operator, in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol shown on the key and in expression traces.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Look an operator up by its key symbol.
    ///
    /// ASCII `*` and `/` are accepted alongside the keypad glyphs.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "×" | "*" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator.
    ///
    /// Returns `None` when dividing by exactly zero. Other results may be
    /// non-finite on overflow; the caller decides what to do with them.
    pub fn apply(self, previous: f64, current: f64) -> Option<f64> {
        match self {
            Self::Add => Some(previous + current),
            Self::Subtract => Some(previous - current),
            Self::Multiply => Some(previous * current),
            Self::Divide if current == 0.0 => None,
            Self::Divide => Some(previous / current),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
