//! Linear-light RGB (sRGB primaries, D65 white) and the sRGB transfer function.

use std::fmt;
use std::sync::LazyLock;

use colourway_core::{format_number, parse_number};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::grammar::{self, NUMBER};
use crate::model::{ColourModel, Space};
use crate::rgb::Rgb;

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| grammar::function("lin", &[NUMBER, NUMBER, NUMBER], ","));

/// Remove sRGB companding from a channel value.
#[inline]
pub fn decode_srgb(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Apply sRGB companding to a linear channel value.
#[inline]
pub fn encode_srgb(v: f64) -> f64 {
    if v <= 0.0031308 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

/// An RGB triplet without companding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Linear {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Linear {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl ColourModel for Linear {
    const SPACE: Space = Space::Linear;
    const PRECISION: f64 = 1e-6;
    const EMPTY: Self = Self::new(f64::NAN, f64::NAN, f64::NAN);

    fn components(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    fn parse(s: &str) -> Option<Self> {
        let [r, g, b] = grammar::captures3(&PATTERN, s)?;
        Some(Self::new(
            parse_number(r, None, None).ok()?,
            parse_number(g, None, None).ok()?,
            parse_number(b, None, None).ok()?,
        ))
    }
}

impl From<Rgb> for Linear {
    fn from(rgb: Rgb) -> Self {
        Self::new(decode_srgb(rgb.r), decode_srgb(rgb.g), decode_srgb(rgb.b))
    }
}

/// Companding clamps the result to `[0.0, 1.0]`.
impl From<Linear> for Rgb {
    fn from(lin: Linear) -> Self {
        Rgb::new(
            encode_srgb(lin.r).clamp(0.0, 1.0),
            encode_srgb(lin.g).clamp(0.0, 1.0),
            encode_srgb(lin.b).clamp(0.0, 1.0),
        )
    }
}

impl fmt::Display for Linear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = |v: f64| format_number(v, Self::PRECISION);
        write!(f, "lin({},{},{})", p(self.r), p(self.g), p(self.b))
    }
}
