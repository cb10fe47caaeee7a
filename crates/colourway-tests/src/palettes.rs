//! Integration tests for palettes and the registry.
//!
//! Palettes are written to disk as JSON, loaded through the palette
//! sources and queried with colours parsed by colourway-space.

use std::path::Path;

use colourway_palette::{
    DirectorySource, Entry, FileSource, MatchOptions, Palette, PaletteConfig, PaletteError,
    PaletteRegistry,
};
use colourway_space::{Colour, Lab, Origin};

// ── Helpers ────────────────────────────────────────────────────

const BASIC: &str = r##"{
    "name": "Basic",
    "desc": "Twelve basic colour terms",
    "entries": [
        { "defn": "#000", "name": "black" },
        { "defn": "#fff", "name": "white" },
        { "defn": "lab(50 75 65)", "name": "red" },
        { "defn": "lab(50 -50 50)", "name": "green" },
        { "defn": "lab(95 -15 90)", "name": "yellow" },
        { "defn": "lab(50 15 -75)", "name": "blue" },
        { "defn": "lab(35 35 35)", "name": "brown" },
        { "defn": "lab(60 40 65)", "name": "orange" },
        { "defn": "lab(30 50 -30)", "name": "purple" },
        { "defn": "lab(80 20 5)", "name": "pink" },
        { "defn": "#999", "name": "grey" },
        { "defn": "lab(60 -40 0)", "name": "teal" }
    ]
}"##;

fn write(dir: &Path, file: &str, json: &str) {
    std::fs::write(dir.join(file), json).unwrap();
}

fn registry_with_basic() -> (tempfile::TempDir, PaletteRegistry) {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "basic.palette", BASIC);
    let config = PaletteConfig {
        dirs: vec![dir.path().to_path_buf()],
        ..PaletteConfig::default()
    };
    let mut registry = PaletteRegistry::new();
    let added = registry.load(&DirectorySource::from_config(&config)).unwrap();
    assert_eq!(added, [1]);
    (dir, registry)
}

// ── Matching ───────────────────────────────────────────────────

#[test]
fn tomato_matches_red_orange_pink() {
    let (_dir, registry) = registry_with_basic();
    let tomato = registry.parse_string("tomato").unwrap().unwrap();
    let basic = registry.palette_of("basic").unwrap();

    let matches = basic
        .match_with(&tomato, MatchOptions { count: 3, ..MatchOptions::default() })
        .unwrap();
    let names: Vec<_> = matches.iter().filter_map(|m| m.name.as_deref()).collect();
    assert_eq!(names, ["red", "orange", "pink"]);
    assert!(matches.windows(2).all(|w| w[0].delta_e <= w[1].delta_e));
    assert!((matches[0].delta_e - 12.99).abs() < 0.01);
    assert!((matches[1].delta_e - 14.97).abs() < 0.01);
    assert!((matches[2].delta_e - 24.17).abs() < 0.01);
    assert_eq!(matches[0].colour.origin(), &Origin::Palette("basic".into()));
}

#[test]
fn brown_is_found_at_index_six() {
    let (_dir, registry) = registry_with_basic();
    let basic = registry.palette_of("Basic").unwrap();
    let query = Colour::parse("#8A371B").unwrap();

    assert_eq!(basic.find(&query, 0, None).unwrap(), Some(6));
    assert_eq!(basic.find(&query, 0, Some(Lab::JND)).unwrap(), Some(6));
    assert_eq!(basic.find(&query, 7, Some(Lab::JND)).unwrap(), None);
    let white = registry.parse_string("white").unwrap().unwrap();
    assert_eq!(basic.find(&white, 0, None).unwrap(), Some(1));
}

#[test]
fn css_duplicates_find_the_first_spelling() {
    let registry = PaletteRegistry::new();
    let css = registry.css();
    for (first, second) in [("aqua", "cyan"), ("fuchsia", "magenta"), ("gray", "grey")] {
        let colour = css.colour_of(second).unwrap();
        assert_eq!(css.find(colour, 0, None).unwrap(), css.index_of(first), "{second}");
    }
}

#[test]
fn exact_css_colour_matches_itself() {
    let registry = PaletteRegistry::new();
    let css = registry.css();
    let query = Colour::parse("#9acd32").unwrap();
    let best = css.match_with(&query, MatchOptions::default()).unwrap();
    assert_eq!(best.len(), 1);
    assert_eq!(best[0].name.as_deref(), Some("yellowgreen"));
    assert_eq!(best[0].delta_e, 0.0);
}

// ── Registry ───────────────────────────────────────────────────

#[test]
fn css_names_shadow_user_palettes() {
    let (_dir, registry) = registry_with_basic();
    let brown = registry.parse_string("Brown").unwrap().unwrap();
    assert_eq!(brown.origin(), &Origin::Palette("css".into()));
    assert_eq!(brown.rgb().to_hex_string(true), "#a52a2a");

    let basic_brown = registry.palette_of("basic").unwrap().colour_of("brown").unwrap();
    assert_eq!(basic_brown.origin(), &Origin::Palette("basic".into()));
    assert_eq!(basic_brown.to_string(), "brown");
}

#[test]
fn loading_the_same_palette_twice_fails() {
    let (dir, mut registry) = registry_with_basic();
    let err = registry
        .load(&FileSource::new(dir.path().join("basic.palette")))
        .unwrap_err();
    assert!(matches!(err, PaletteError::DuplicatePalette(ref name) if name == "basic"));
    assert_eq!(registry.count(), 2);
}

#[test]
fn saved_palette_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let palette = Palette::new(
        "Brand",
        "Brand colours",
        [
            Entry::named("hsl(200,80%,40%)", "Primary"),
            Entry::named("lch(70 30 40)", "Accent"),
            Entry::new("#eee", None),
        ],
    );
    palette.save_to_file(&dir.path().join("brand.palette")).unwrap();

    let mut registry = PaletteRegistry::new();
    registry
        .load(&DirectorySource::new(vec![dir.path().to_path_buf()], "palette"))
        .unwrap();
    let brand = registry.palette_of("brand").unwrap();
    assert_eq!(brand.description(), "Brand colours");
    assert_eq!(brand.len(), 3);
    assert_eq!(brand.definition_of("accent").unwrap(), "lch(70 30 40)");

    let primary = registry.parse_string("primary").unwrap().unwrap();
    assert!(primary.equal_to(&Colour::parse("hsl(200,80%,40%)").unwrap(), None));
}

#[test]
fn malformed_palette_file_reports_location() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "broken.palette",
        r##"{"name": "broken", "entries": [{"defn": "#000"}, {"defn": "#111"}, {"name": "x"}]}"##,
    );
    let mut registry = PaletteRegistry::new();
    let err = registry
        .load(&DirectorySource::new(vec![dir.path().to_path_buf()], "palette"))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing field: \"defn\" on: item at index 2 in field \"entries\" of: root object"
    );
    assert_eq!(registry.count(), 1);
}
