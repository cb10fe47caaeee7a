//! Error types for palettes and the registry.

use thiserror::Error;

/// Errors raised by palette lookups, the registry and palette files.
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Argument index = {index} out of range [0,{len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Palette {palette} does not define a colour named {name}")]
    UnknownColour { palette: String, name: String },

    #[error("No palette named {0}")]
    UnknownPalette(String),

    #[error("There is already a palette named {0} in the list")]
    DuplicatePalette(String),

    #[error("Argument index = {index} outside valid range [0,{count})")]
    PaletteIndexOutOfRange { index: usize, count: usize },

    #[error("{0}")]
    MalformedDefinition(String),

    #[error("Invalid JSON: {0}")]
    Json(String),

    #[error(
        "Cannot parse palette {palette} entry #{} ({}) definition {defn} as a colour",
        .position + 1,
        .name.as_deref().unwrap_or("unnamed")
    )]
    UnparseableEntry {
        palette: String,
        position: usize,
        name: Option<String>,
        defn: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for palette operations.
pub type Result<T> = std::result::Result<T, PaletteError>;
