//! Domain Layer - Errors
//!
//! Failures of the key-value store backing the list. A stored value that
//! does not parse is not an error here; see `persistence::LoadOutcome`.

use thiserror::Error;

/// Common result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-level errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store cannot be reached at all (e.g. disabled by the browser)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read '{key}': {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
    #[error("failed to serialize list: {0}")]
    Serialize(#[from] serde_json::Error),
}
