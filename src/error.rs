//! Store error taxonomy
//!
//! Validation failures never construct a `StoreError`: malformed events are
//! rejected at deserialization, before any store interaction. The store only
//! fails on persistence, and those failures propagate upward intact.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from the factory store's persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("data file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("data encoding error: {0}")]
    Serde(#[from] serde_json::Error),
}
