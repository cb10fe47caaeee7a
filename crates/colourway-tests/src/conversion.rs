//! Integration tests for colour conversion.
//!
//! Drives the `Colour` facade with real palette data from
//! colourway-palette and the numeric helpers from colourway-core.

use colourway_core::format_number;
use colourway_palette::PaletteRegistry;
use colourway_space::{Colour, ColourModel, Hsl, Lab, Rgb, Space, SpaceValue};

// ── Helpers ────────────────────────────────────────────────────

fn css_colours() -> Vec<Colour> {
    let registry = PaletteRegistry::new();
    let css = registry.css();
    (0..css.len())
        .map(|i| css.colour_at(i).unwrap().clone())
        .collect()
}

// ── Facade ─────────────────────────────────────────────────────

#[test]
fn hsl_definition_reaches_short_hex() {
    let colour = Colour::parse("hsl(72,100%,50%)").unwrap();
    assert_eq!(colour.space(), Space::Hsl);
    assert_eq!(colour.hsl().to_string(), "hsl(72,100%,50%)");
    assert_eq!(colour.rgb().to_hex_string(false), "#cf0");
    assert!(colour.rgb().equal_to(&Rgb::parse("#cf0").unwrap()));
    assert_eq!(Hsl::from(*colour.rgb()).to_string(), "hsl(72,100%,50%)");
}

#[test]
fn facade_agrees_with_direct_conversions() {
    let colour = Colour::parse("lab(35 35 35)").unwrap();
    let via_rgb = Colour::new(*colour.rgb());
    assert!(via_rgb.lab().equal_within(colour.lab(), 0.5));
    assert!(colour.equal_to(&via_rgb, None));
    assert!(colour.delta_e(&via_rgb) < Lab::JND);
}

#[test]
fn number_formatting() {
    assert_eq!(format_number(0.5, 1e-3), "0.5");
    assert_eq!(format_number(3.0, 1.0), "3");
    assert_eq!(
        SpaceValue::from(Lab::new(50.0, -12.5, 0.0)).to_string(),
        "lab(50 -12.5 0)"
    );
}

// ── CSS colours across every space ─────────────────────────────

#[test]
fn css_definitions_are_lossless_hex() {
    let registry = PaletteRegistry::new();
    let css = registry.css();
    for (i, colour) in css_colours().iter().enumerate() {
        let defn = css.definition_at(i).unwrap();
        assert!(colour.rgb().is_hexable(), "{defn}");
        assert_eq!(colour.rgb().to_hex_string(true), defn);
    }
}

#[test]
fn css_colours_survive_every_space() {
    for colour in css_colours() {
        for space in Space::ALL {
            // The YCC inverse only recovers achromatic colours.
            if space == Space::Ycc {
                continue;
            }
            let back = Colour::new(colour.value_in(space));
            assert!(
                back.equal_to(&colour, None),
                "{} via {space}: {}",
                colour.name().unwrap_or_default(),
                back.rgb()
            );
        }
    }
}

#[test]
fn css_lab_and_lch_text_is_close() {
    for colour in css_colours() {
        let lab = Colour::parse(&colour.lab().to_string()).unwrap();
        let lch = Colour::parse(&colour.lch().to_string()).unwrap();
        assert!(colour.delta_e(&lab) < 0.1, "{}", colour.lab());
        assert!(colour.delta_e(&lch) < 0.1, "{}", colour.lch());
    }
}

#[test]
fn greys_survive_ycc() {
    for text in ["#000", "#808080", "#c0c0c0", "#fff"] {
        let colour = Colour::parse(text).unwrap();
        let back = Colour::new(*colour.ycc());
        assert!(back.equal_to(&colour, None), "{text}");
    }
}
