//! Store error types.

use thiserror::Error;

/// Errors that can occur when using the store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the store root.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to perform a filesystem operation.
    #[error("Store operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// A key contained characters the store cannot represent on disk.
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}
