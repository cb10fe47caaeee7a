//! Hue-whiteness-blackness.

use std::fmt;
use std::sync::LazyLock;

use colourway_core::{format_number, parse_number};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::grammar::{self, HUE_GRAD, NUMBER};
use crate::hsl::{hue_degrees, hue_of, percent, Hsl};
use crate::model::{ColourModel, Space};
use crate::rgb::Rgb;

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| grammar::function("hwb", &[HUE_GRAD, NUMBER, NUMBER], ","));

/// A colour as hue, whiteness and blackness, all in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hwb {
    pub h: f64,
    pub w: f64,
    pub b: f64,
}

impl Hwb {
    pub const fn new(h: f64, w: f64, b: f64) -> Self {
        Self { h, w, b }
    }

    /// Hue in whole degrees.
    pub fn hue(&self) -> f64 {
        hue_degrees(self.h)
    }

    /// Whiteness in `[0, 100]`.
    pub fn whiteness(&self) -> f64 {
        percent(self.w)
    }

    /// Blackness in `[0, 100]`.
    pub fn blackness(&self) -> f64 {
        percent(self.b)
    }
}

impl ColourModel for Hwb {
    const SPACE: Space = Space::Hwb;
    const PRECISION: f64 = 1e-2;
    const EMPTY: Self = Self::new(f64::NAN, f64::NAN, f64::NAN);

    fn components(&self) -> [f64; 3] {
        [self.h, self.w, self.b]
    }

    fn parse(s: &str) -> Option<Self> {
        let [h, w, b] = grammar::captures3(&PATTERN, s)?;
        Some(Self::new(
            parse_number(h, Some(360.0), None).ok()?,
            parse_number(w, None, None).ok()?,
            parse_number(b, None, None).ok()?,
        ))
    }
}

impl From<Rgb> for Hwb {
    fn from(rgb: Rgb) -> Self {
        let (h, max, min) = hue_of(&rgb);
        let chroma = max - min;
        let saturation = if chroma == 0.0 { 0.0 } else { chroma / max };
        Self::new(h, (1.0 - saturation) * max, 1.0 - max)
    }
}

/// Whiteness and blackness summing past one are scaled down proportionally.
impl From<Hwb> for Rgb {
    fn from(hwb: Hwb) -> Self {
        let (mut w, mut b) = (hwb.w, hwb.b);
        let sum = w + b;
        if sum > 1.0 {
            w /= sum;
            b /= sum;
        }
        let t = 1.0 - w - b;
        let pure = Rgb::from(Hsl::new(hwb.h, 1.0, 0.5));
        Rgb::new(pure.r * t + w, pure.g * t + w, pure.b * t + w)
    }
}

impl fmt::Display for Hwb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = |v: f64| format_number(v, Self::PRECISION);
        write!(
            f,
            "hwb({},{}%,{}%)",
            p(self.h * 360.0),
            p(self.w * 100.0),
            p(self.b * 100.0)
        )
    }
}
