//! Snapshot error types.

use thiserror::Error;

/// Errors that can occur when handing a snapshot to a front end
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}
