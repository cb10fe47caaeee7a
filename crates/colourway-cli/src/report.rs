//! Plain text output for each sub-command.

use std::fmt::Write;

use colourway_palette::{Match, PaletteRegistry};
use colourway_space::{Colour, Space};

/// A colour followed by its value in every space.
pub fn conversion(colour: &Colour) -> String {
    let mut out = format!("{} ({})\n", colour, colour.origin());
    for space in Space::ALL {
        let _ = writeln!(out, "  {:<7} {}", space.name(), colour.value_in(space));
    }
    out
}

/// Ranked matches, nearest first.
pub fn matches(query: &Colour, palette: &str, matches: &[Match]) -> String {
    let mut out = format!("{query} in {palette}:\n");
    if matches.is_empty() {
        out.push_str("  no matches\n");
    }
    for m in matches {
        let _ = writeln!(
            out,
            "{:>5}  {:<20} {:<22} {:.4}",
            m.index,
            m.name.as_deref().unwrap_or("-"),
            m.definition,
            m.delta_e
        );
    }
    out
}

/// One line per registered palette.
pub fn palettes(registry: &PaletteRegistry) -> String {
    let mut out = String::new();
    for (index, palette) in registry.palettes().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<16} {:>5}  {}",
            index,
            palette.name(),
            palette.len(),
            palette.description()
        );
    }
    out
}
