//! Abacus: a pure calculator input state machine
//!
//! Abacus is the logic behind a single-screen keypad calculator: digit entry,
//! the four basic operators with left-to-right chaining, percent and sign
//! toggling, and a bounded history of results. Rendering, theming and input
//! devices belong to whichever front end drives it.
//!
//! # Core Concepts
//!
//! - **Phase**: the explicit state of an operation (`Idle`, `AwaitingOperand`,
//!   `EnteringOperand`, `Result`, `Error`)
//! - **Entry rules**: validation of appended digits, accumulating every violation
//! - **History**: immutable, bounded log of completed calculations
//! - **Snapshot**: owned, serializable view handed to the presentation layer
//!
//! Arithmetic only ever sees canonical numbers. Thousands separators are added
//! by [`display::format_for_display`] at render time and nowhere else.
//!
//! # Example
//!
//! ```rust
//! use abacus::engine::{Calculator, Key};
//!
//! let mut calculator = Calculator::new();
//! for label in ["1", "2", "0", "0", "×", "3", "="] {
//!     calculator.press(Key::from_label(label).unwrap());
//! }
//!
//! let snapshot = calculator.snapshot();
//! assert_eq!(snapshot.input, "3600");
//! assert_eq!(snapshot.display_input(), "3,600");
//! assert_eq!(snapshot.history.entries()[0].expression, "1,200 × 3");
//! ```

pub mod core;
pub mod display;
pub mod engine;
pub mod entry;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{HistoryEntry, HistoryLog, Operator, Phase, State};
pub use engine::{BuildError, Calculator, CalculatorBuilder, Key};
pub use entry::DigitToken;
pub use snapshot::Snapshot;
