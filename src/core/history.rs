//! Bounded history of completed calculations.
//!
//! History is immutable: `record` returns a new log with the entry at the
//! front, evicting the oldest entries once the capacity is reached.

use crate::display::format_for_display;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default number of entries kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Record of a single completed calculation.
///
/// `expression` is a display-only trace (`"1,200 × 3"`). `result` is the
/// canonical value without separators, so it can be reused as input.
///
/// # Example
///
/// ```rust
/// use abacus::core::HistoryEntry;
///
/// let entry = HistoryEntry::new("1,200 × 3", "3600");
/// assert_eq!(entry.result, "3600");
/// assert_eq!(entry.display_result(), "3,600");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Stable key for list rendering
    pub id: Uuid,
    /// `"<previous> <symbol> <current>"`
    pub expression: String,
    /// Canonical result value
    pub result: String,
    /// When the calculation completed
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            expression: expression.into(),
            result: result.into(),
            recorded_at: Utc::now(),
        }
    }

    /// Result with thousands separators, for rendering.
    pub fn display_result(&self) -> String {
        format_for_display(&self.result)
    }
}

/// Ordered history, newest first.
///
/// # Example
///
/// ```rust
/// use abacus::core::{HistoryEntry, HistoryLog};
///
/// let log = HistoryLog::with_capacity(2);
/// let log = log.record(HistoryEntry::new("1 + 1", "2"));
/// let log = log.record(HistoryEntry::new("2 + 2", "4"));
/// let log = log.record(HistoryEntry::new("3 + 3", "6"));
///
/// let results: Vec<&str> = log.entries().iter().map(|e| e.result.as_str()).collect();
/// assert_eq!(results, ["6", "4"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLog {
    /// Create an empty log holding up to twenty entries.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty log with a custom bound.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Record an entry at the front, returning a new log.
    ///
    /// This is a pure function: the existing log is left untouched.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = Vec::with_capacity(self.capacity);
        entries.push(entry);
        entries.extend(self.entries.iter().cloned());
        entries.truncate(self.capacity);
        Self {
            entries,
            capacity: self.capacity,
        }
    }

    /// An empty log with the same capacity.
    pub fn cleared(&self) -> Self {
        Self::with_capacity(self.capacity)
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// Look up an entry by its id.
    pub fn find(&self, id: Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: usize) -> HistoryEntry {
        HistoryEntry::new(format!("{n} + 0"), n.to_string())
    }

    #[test]
    fn new_history_is_empty() {
        let history = HistoryLog::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.latest().is_none());
        assert_eq!(history.capacity(), DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn record_puts_newest_first() {
        let history = HistoryLog::new().record(entry(1)).record(entry(2));

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].result, "2");
        assert_eq!(history.entries()[1].result, "1");
        assert_eq!(history.latest().map(|e| e.result.as_str()), Some("2"));
    }

    #[test]
    fn record_is_immutable() {
        let history = HistoryLog::new();
        let new_history = history.record(entry(1));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn record_evicts_oldest_at_capacity() {
        let mut history = HistoryLog::new();
        for n in 0..25 {
            history = history.record(entry(n));
        }

        assert_eq!(history.len(), DEFAULT_HISTORY_CAPACITY);
        assert_eq!(history.entries()[0].result, "24");
        assert_eq!(history.entries()[19].result, "5");
    }

    #[test]
    fn cleared_keeps_capacity() {
        let history = HistoryLog::with_capacity(3).record(entry(1));
        let cleared = history.cleared();

        assert!(cleared.is_empty());
        assert_eq!(cleared.capacity(), 3);
    }

    #[test]
    fn find_looks_up_by_id() {
        let first = entry(1);
        let id = first.id;
        let history = HistoryLog::new().record(first).record(entry(2));

        assert_eq!(history.find(id).map(|e| e.result.as_str()), Some("1"));
        assert!(history.find(Uuid::new_v4()).is_none());
    }

    #[test]
    fn entries_get_distinct_ids() {
        assert_ne!(entry(1).id, entry(1).id);
    }

    #[test]
    fn display_result_adds_separators() {
        let entry = HistoryEntry::new("1000 × 1000", "1000000");
        assert_eq!(entry.display_result(), "1,000,000");
        assert_eq!(entry.result, "1000000");
    }

    #[test]
    fn history_serializes_correctly() {
        let history = HistoryLog::new().record(entry(7));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: HistoryLog = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
