//! The list of known palettes.
//!
//! A registry always starts with the CSS named colours at index 0. Tests and
//! embedders build their own with [`PaletteRegistry::new`]; the process-wide
//! instance is reached through [`PaletteRegistry::shared`].

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use colourway_space::Colour;
use parking_lot::RwLock;
use tracing::debug;

use crate::css::CSS_COLOURS;
use crate::error::{PaletteError, Result};
use crate::palette::{Entry, Palette};
use crate::source::PaletteSource;

static SHARED: LazyLock<RwLock<PaletteRegistry>> =
    LazyLock::new(|| RwLock::new(PaletteRegistry::new()));

/// Registered palettes in registration order, with a name index.
#[derive(Debug, Clone)]
pub struct PaletteRegistry {
    palettes: Vec<Arc<Palette>>,
    indices: HashMap<String, usize>,
}

impl PaletteRegistry {
    /// Create a registry holding only the CSS palette.
    pub fn new() -> Self {
        let css = Palette::new(
            "css",
            "CSS",
            CSS_COLOURS.iter().map(|&(name, defn)| Entry::named(defn, name)),
        );
        Self {
            indices: HashMap::from([(css.name().to_string(), 0)]),
            palettes: vec![Arc::new(css)],
        }
    }

    /// The process-wide registry.
    pub fn shared() -> &'static RwLock<PaletteRegistry> {
        &SHARED
    }

    /// Register a palette and return its index.
    pub fn add(&mut self, palette: Palette) -> Result<usize> {
        if self.indices.contains_key(palette.name()) {
            return Err(PaletteError::DuplicatePalette(palette.name().to_string()));
        }
        let index = self.palettes.len();
        debug!(name = %palette.name(), index, entries = palette.len(), "Registered palette");
        self.indices.insert(palette.name().to_string(), index);
        self.palettes.push(Arc::new(palette));
        Ok(index)
    }

    /// Register every palette `source` yields, returning their indices.
    ///
    /// Palettes added before a failure stay registered.
    pub fn load(&mut self, source: &dyn PaletteSource) -> Result<Vec<usize>> {
        source
            .load()?
            .into_iter()
            .map(|palette| self.add(palette))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.palettes.len()
    }

    /// The built-in CSS palette.
    pub fn css(&self) -> &Arc<Palette> {
        &self.palettes[0]
    }

    pub fn palettes(&self) -> impl Iterator<Item = &Arc<Palette>> + '_ {
        self.palettes.iter()
    }

    pub fn palette_at(&self, index: usize) -> Result<&Arc<Palette>> {
        self.palettes
            .get(index)
            .ok_or(PaletteError::PaletteIndexOutOfRange {
                index,
                count: self.palettes.len(),
            })
    }

    pub fn has_palette(&self, name: &str) -> bool {
        self.indices.contains_key(&name.to_lowercase())
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(&name.to_lowercase()).copied()
    }

    pub fn palette_of(&self, name: &str) -> Result<&Arc<Palette>> {
        self.index_of(name)
            .map(|index| &self.palettes[index])
            .ok_or_else(|| PaletteError::UnknownPalette(name.to_string()))
    }

    /// Parse colour notation, falling back to colour names.
    ///
    /// Palettes are searched in registration order, so CSS names take
    /// precedence over user palettes.
    pub fn parse_string(&self, text: &str) -> Result<Option<Colour>> {
        if let Some(colour) = Colour::parse(text) {
            return Ok(Some(colour));
        }
        for palette in &self.palettes {
            if palette.has_colour(text) {
                return palette.colour_of(text).map(|c| Some(c.clone()));
            }
        }
        Ok(None)
    }
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::new()
    }
}
