//! Error types for learning-core.

use thiserror::Error;

/// Result type alias using CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised when a caller hands the core an invalid argument.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid rating: {0} (expected hard, good or easy)")]
    InvalidRating(String),

    #[error("invalid CEFR level: {0}")]
    InvalidLevel(String),

    #[error("invalid learning item '{word}': {reason}")]
    InvalidItem { word: String, reason: String },

    #[error("not enough words for a quiz: need {needed}, have {available}")]
    NotEnoughWords { needed: usize, available: usize },
}
