//! CIE xyY chromaticity plus luminance.

use std::fmt;
use std::sync::LazyLock;

use colourway_core::{format_number, numbers_equal, parse_number};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::grammar::{self, NUMBER};
use crate::model::{ColourModel, Space};
use crate::xyz::Xyz;

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| grammar::function("xyy", &[NUMBER, NUMBER, NUMBER], ","));

/// Chromaticity coordinates `x`, `y` and luminance `Y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Xyy {
    pub x: f64,
    pub y: f64,
    /// The `Y` (luminance) component, shared with XYZ.
    pub luminance: f64,
}

impl Xyy {
    /// Chromaticity of the D65 white point, given to black.
    pub const WHITE_CHROMATICITY: (f64, f64) = (0.3127, 0.3290);

    pub const fn new(x: f64, y: f64, luminance: f64) -> Self {
        Self { x, y, luminance }
    }
}

impl ColourModel for Xyy {
    const SPACE: Space = Space::Xyy;
    const PRECISION: f64 = 1e-6;
    const EMPTY: Self = Self::new(f64::NAN, f64::NAN, f64::NAN);

    fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.luminance]
    }

    fn parse(s: &str) -> Option<Self> {
        let [x, y, l] = grammar::captures3(&PATTERN, s)?;
        Some(Self::new(
            parse_number(x, None, None).ok()?,
            parse_number(y, None, None).ok()?,
            parse_number(l, None, None).ok()?,
        ))
    }
}

impl From<Xyz> for Xyy {
    fn from(xyz: Xyz) -> Self {
        let sum = xyz.x + xyz.y + xyz.z;
        if sum == 0.0 {
            let (x, y) = Self::WHITE_CHROMATICITY;
            return Self::new(x, y, xyz.y);
        }
        Self::new(xyz.x / sum, xyz.y / sum, xyz.y)
    }
}

/// A chromaticity with `y` at zero has no XYZ image and yields [`Xyz::EMPTY`].
impl From<Xyy> for Xyz {
    fn from(xyy: Xyy) -> Self {
        if numbers_equal(xyy.y, 0.0, Xyy::PRECISION) {
            return Xyz::EMPTY;
        }
        Xyz::new(
            xyy.x * xyy.luminance / xyy.y,
            xyy.luminance,
            (1.0 - xyy.x - xyy.y) * xyy.luminance / xyy.y,
        )
    }
}

impl fmt::Display for Xyy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = |v: f64| format_number(v, Self::PRECISION);
        write!(f, "xyy({},{},{})", p(self.x), p(self.y), p(self.luminance))
    }
}
