//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Product store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Corrupt data file {path}: {message}")]
    Corrupt { path: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Store lock poisoned")]
    LockPoisoned,
}
