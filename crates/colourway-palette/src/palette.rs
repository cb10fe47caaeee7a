//! Palettes of named colour definitions.

use std::collections::HashMap;
use std::sync::OnceLock;

use colourway_space::{Colour, Origin};
use tracing::debug;

use crate::error::{PaletteError, Result};

/// One palette entry: a colour definition and an optional name.
///
/// The colour is parsed from the definition on first access and cached.
#[derive(Debug, Clone)]
pub struct Entry {
    defn: String,
    name: Option<String>,
    colour: OnceLock<Colour>,
}

impl Entry {
    pub fn new(defn: impl Into<String>, name: Option<String>) -> Self {
        Self {
            defn: defn.into(),
            name,
            colour: OnceLock::new(),
        }
    }

    /// Shorthand for an entry with a name.
    pub fn named(defn: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(defn, Some(name.into()))
    }

    pub fn definition(&self) -> &str {
        &self.defn
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// An ordered set of colour definitions with optional names.
///
/// Names are looked up case-insensitively. When two entries share a name the
/// later one wins the lookup; both stay reachable by index.
#[derive(Debug, Clone)]
pub struct Palette {
    name: String,
    description: String,
    entries: Vec<Entry>,
    indices: HashMap<String, usize>,
}

impl Palette {
    /// Create a palette. The name is stored lower-cased.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        entries: impl IntoIterator<Item = Entry>,
    ) -> Self {
        let entries: Vec<Entry> = entries.into_iter().collect();
        let indices = entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.name.as_ref().map(|n| (n.to_lowercase(), i)))
            .collect();

        Self {
            name: name.into().to_lowercase(),
            description: description.into(),
            entries,
            indices,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(definition, name)` for every entry in index order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.entries.iter().map(|e| (e.definition(), e.name()))
    }

    pub fn has_colour(&self, name: &str) -> bool {
        self.indices.contains_key(&name.to_lowercase())
    }

    /// Position of the entry called `name`, if any.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(&name.to_lowercase()).copied()
    }

    pub fn colour_at(&self, index: usize) -> Result<&Colour> {
        self.entry_colour(index, self.entry(index)?)
    }

    pub fn definition_at(&self, index: usize) -> Result<&str> {
        Ok(self.entry(index)?.definition())
    }

    pub fn name_at(&self, index: usize) -> Result<Option<&str>> {
        Ok(self.entry(index)?.name())
    }

    pub fn colour_of(&self, name: &str) -> Result<&Colour> {
        let index = self.lookup(name)?;
        self.entry_colour(index, &self.entries[index])
    }

    pub fn definition_of(&self, name: &str) -> Result<&str> {
        let index = self.lookup(name)?;
        Ok(self.entries[index].definition())
    }

    /// Scan from `start_at` for the first entry equal to `colour`.
    ///
    /// Without `delta_e` entries must match in natural 8-bit RGB; with it
    /// the CIEDE2000 distance must be strictly below the threshold.
    pub fn find(
        &self,
        colour: &Colour,
        start_at: usize,
        delta_e: Option<f64>,
    ) -> Result<Option<usize>> {
        for (index, entry) in self.entries.iter().enumerate().skip(start_at) {
            if colour.equal_to(self.entry_colour(index, entry)?, delta_e) {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    fn entry(&self, index: usize) -> Result<&Entry> {
        self.entries.get(index).ok_or(PaletteError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    fn lookup(&self, name: &str) -> Result<usize> {
        let key = name.to_lowercase();
        self.indices
            .get(&key)
            .copied()
            .ok_or_else(|| PaletteError::UnknownColour {
                palette: self.name.clone(),
                name: key,
            })
    }

    pub(crate) fn entry_colour<'a>(&self, index: usize, entry: &'a Entry) -> Result<&'a Colour> {
        if let Some(colour) = entry.colour.get() {
            return Ok(colour);
        }

        let parsed = Colour::parse(&entry.defn).ok_or_else(|| PaletteError::UnparseableEntry {
            palette: self.name.clone(),
            position: index,
            name: entry.name.clone(),
            defn: entry.defn.clone(),
        })?;
        let parsed = match &entry.name {
            Some(name) => parsed.with_name(name.as_str()),
            None => parsed,
        }
        .with_origin(Origin::Palette(self.name.clone()));

        debug!(palette = %self.name, index, defn = %entry.defn, "Parsed palette entry");
        Ok(entry.colour.get_or_init(|| parsed))
    }

    pub(crate) fn raw_entries(&self) -> &[Entry] {
        &self.entries
    }
}
