//! Read-only view of the calculator for rendering.
//!
//! A presentation layer takes a [`Snapshot`] after each transition and
//! re-renders from it. Snapshots are owned copies; changing one has no effect
//! on the engine, and there is no way to restore an engine from one.

use crate::core::{HistoryLog, Operator, Phase, State};
use crate::display::format_for_display;
use serde::Serialize;

pub mod error;

pub use error::SnapshotError;

/// Everything a front end needs to draw the calculator.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    /// Input buffer, canonical (no separators)
    pub input: String,

    /// Pending left operand or the last result trace
    pub pending_operand: String,

    /// Operator waiting for a right operand
    pub pending_operator: Option<Operator>,

    /// Whether the next digit replaces the input
    pub reset_next: bool,

    /// Explicit phase the flags above are derived from
    pub phase: Phase,

    /// Completed calculations, newest first
    pub history: HistoryLog,
}

impl Snapshot {
    /// Input with thousands separators.
    pub fn display_input(&self) -> String {
        format_for_display(&self.input)
    }

    /// Whether the display shows the error sentinel.
    pub fn is_error(&self) -> bool {
        self.phase.is_error()
    }

    pub fn phase_name(&self) -> &str {
        self.phase.name()
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }
}
