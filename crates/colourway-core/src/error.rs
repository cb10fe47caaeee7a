//! Error types for Colourway primitives.

use thiserror::Error;

/// Errors raised by the numeric primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Malformed number: {0:?}")]
    MalformedNumber(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
