//! Colourway Palette - named colour palettes and the palette registry.
//!
//! A [`Palette`] is an ordered list of colour definitions with optional
//! names. Entry colours are parsed on first access. The [`PaletteRegistry`]
//! starts with the built-in CSS palette and accepts more from JSON files.

pub mod config;
mod css;
pub mod error;
pub mod json;
pub mod matching;
pub mod palette;
pub mod registry;
pub mod source;

pub use config::PaletteConfig;
pub use error::{PaletteError, Result};
pub use matching::{Match, MatchOptions};
pub use palette::{Entry, Palette};
pub use registry::PaletteRegistry;
pub use source::{DirectorySource, FileSource, PaletteSource};
