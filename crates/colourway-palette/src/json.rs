//! The JSON palette file format.
//!
//! ```json
//! { "name": "basic", "desc": "Basic colours",
//!   "entries": [ { "defn": "#000", "name": "black" }, { "defn": "#fff" } ] }
//! ```
//!
//! `desc` defaults to the name and entry names are optional.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{PaletteError, Result};
use crate::palette::{Entry, Palette};

#[derive(Serialize)]
struct PaletteDocument<'a> {
    name: &'a str,
    desc: &'a str,
    entries: Vec<EntryDocument<'a>>,
}

#[derive(Serialize)]
struct EntryDocument<'a> {
    defn: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn malformed(message: impl Into<String>) -> PaletteError {
    PaletteError::MalformedDefinition(message.into())
}

impl Palette {
    /// Parse a palette from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let root: Value =
            serde_json::from_str(json).map_err(|e| PaletteError::Json(e.to_string()))?;
        Self::from_json_value(&root)
    }

    /// Build a palette from an already parsed JSON document.
    pub fn from_json_value(root: &Value) -> Result<Self> {
        let name = root
            .get("name")
            .map(text)
            .ok_or_else(|| malformed("Missing field: \"name\" on: root object"))?;
        let desc = root.get("desc").map(text).unwrap_or_else(|| name.clone());

        let mut entries = Vec::new();
        if let Some(items) = root.get("entries") {
            let items = items
                .as_array()
                .ok_or_else(|| malformed("Field is not an array: \"entries\" on: root object"))?;
            for (i, item) in items.iter().enumerate() {
                let defn = item.get("defn").map(text).ok_or_else(|| {
                    malformed(format!(
                        "Missing field: \"defn\" on: item at index {i} in field \"entries\" of: root object"
                    ))
                })?;
                entries.push(Entry::new(defn, item.get("name").map(text)));
            }
        }

        if entries.is_empty() {
            return Err(malformed("Palette contains no entries"));
        }
        Ok(Palette::new(name, desc, entries))
    }

    /// Read and parse a palette file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let palette = Self::from_json(&data)?;
        debug!(path = %path.display(), name = %palette.name(), entries = palette.len(), "Loaded palette file");
        Ok(palette)
    }

    /// Serialize to pretty-printed JSON in the palette file format.
    pub fn to_json(&self) -> Result<String> {
        let document = PaletteDocument {
            name: self.name(),
            desc: self.description(),
            entries: self
                .entries()
                .map(|(defn, name)| EntryDocument { defn, name })
                .collect(),
        };
        serde_json::to_string_pretty(&document).map_err(|e| PaletteError::Json(e.to_string()))
    }

    /// Write the palette to `path` as JSON.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
