//! CIE XYZ tristimulus values and the RGB/whitepoint transforms.
#![allow(clippy::excessive_precision)]

use std::fmt;
use std::sync::LazyLock;

use colourway_core::{format_number, parse_number, Matrix3x1, Matrix3x3};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::grammar::{self, NUMBER};
use crate::linear::Linear;
use crate::model::{ColourModel, Space};

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| grammar::function("xyz", &[NUMBER, NUMBER, NUMBER], ","));

/// Linear sRGB to XYZ (D65).
pub const FROM_LINEAR: Matrix3x3 = Matrix3x3::new([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ (D65) to linear sRGB.
pub const TO_LINEAR: Matrix3x3 = Matrix3x3::new([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// Adapts XYZ from a D65 to a D50 whitepoint.
pub const D50: Matrix3x3 = Matrix3x3::new([
    [1.0478112, 0.0228866, -0.0501270],
    [0.0295424, 0.9904844, -0.0170491],
    [-0.0092345, 0.0150436, 0.7521316],
]);

/// Adapts XYZ from a D50 to a D65 whitepoint.
pub const D65: Matrix3x3 = Matrix3x3::new([
    [0.9555766, -0.0230393, 0.0631636],
    [-0.0282895, 1.0099416, 0.0210077],
    [0.0122982, -0.0204830, 1.3299098],
]);

/// A tristimulus value, normally relative to a D65 whitepoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns `m * self`. Use with [`D50`] and [`D65`] to change whitepoint.
    pub fn transform(&self, m: &Matrix3x3) -> Self {
        let [x, y, z] = (*m * Matrix3x1::new([self.x, self.y, self.z])).into_inner();
        Self::new(x, y, z)
    }
}

impl ColourModel for Xyz {
    const SPACE: Space = Space::Xyz;
    const PRECISION: f64 = 1e-6;
    const EMPTY: Self = Self::new(f64::NAN, f64::NAN, f64::NAN);

    fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    fn parse(s: &str) -> Option<Self> {
        let [x, y, z] = grammar::captures3(&PATTERN, s)?;
        Some(Self::new(
            parse_number(x, None, None).ok()?,
            parse_number(y, None, None).ok()?,
            parse_number(z, None, None).ok()?,
        ))
    }
}

impl From<Linear> for Xyz {
    fn from(lin: Linear) -> Self {
        Xyz::new(lin.r, lin.g, lin.b).transform(&FROM_LINEAR)
    }
}

impl From<Xyz> for Linear {
    fn from(xyz: Xyz) -> Self {
        let t = xyz.transform(&TO_LINEAR);
        Linear::new(t.x, t.y, t.z)
    }
}

impl fmt::Display for Xyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = |v: f64| format_number(v, Self::PRECISION);
        write!(f, "xyz({},{},{})", p(self.x), p(self.y), p(self.z))
    }
}
