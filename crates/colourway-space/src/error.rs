//! Colour space errors.

use colourway_core::CoreError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColourError {
    #[error("Cannot parse {0:?} as a colour")]
    Unparseable(String),
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for colour operations.
pub type Result<T> = std::result::Result<T, ColourError>;
