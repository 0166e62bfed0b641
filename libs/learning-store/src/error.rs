//! Store error types.

use learning_core::CoreError;
use thiserror::Error;

/// Result type alias using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("item not found: {0}")]
    ItemNotFound(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("store lock poisoned")]
    LockPoisoned,
}
