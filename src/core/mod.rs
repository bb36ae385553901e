//! Core calculator types and logic.
//!
//! This module contains the pure part of the calculator:
//! - The `State` trait and the explicit `Phase` of an operation
//! - Binary operators
//! - Canonical number parsing and rendering
//! - Immutable, bounded history
//!
//! Nothing here mutates shared state; the engine owns the only mutable copy.

mod history;
mod number;
mod operator;
mod state;

pub use history::{HistoryEntry, HistoryLog, DEFAULT_HISTORY_CAPACITY};
pub use number::{
    canonical, parse_operand, round_significant, strip_separators, NumberError, ERROR_SENTINEL,
    SEPARATOR,
};
pub use operator::Operator;
pub use state::{Phase, State};
