//! Palette loading configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};

/// Where user palettes are looked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Directories scanned in order.
    pub dirs: Vec<PathBuf>,
    /// File extension of palette files, matched case-insensitively.
    pub extension: String,
}

impl PaletteConfig {
    /// The per-user palette directory, `$HOME/.colourway`.
    pub fn user_palette_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".colourway")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PaletteError::Json(e.to_string()))
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            dirs: vec![Self::user_palette_dir()],
            extension: "palette".to_string(),
        }
    }
}
