//! CIE L*C*h*, the polar form of L*a*b*.

use std::fmt;
use std::sync::LazyLock;

use colourway_core::format_number;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::grammar::{self, SIGNED};
use crate::lab::{normalize_degrees, parse_signed, Lab};
use crate::model::{ColourModel, Space};

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| grammar::function("lch", &[SIGNED, SIGNED, SIGNED], r"\s"));

/// Lightness, chroma and hue angle in degrees `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Lch {
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }
}

impl ColourModel for Lch {
    const SPACE: Space = Space::Lch;
    const PRECISION: f64 = 1e-2;
    const EMPTY: Self = Self::new(f64::NAN, f64::NAN, f64::NAN);

    fn components(&self) -> [f64; 3] {
        [self.l, self.c, self.h]
    }

    fn parse(s: &str) -> Option<Self> {
        let [l, c, h] = grammar::captures3(&PATTERN, s)?;
        Some(Self::new(parse_signed(l)?, parse_signed(c)?, parse_signed(h)?))
    }
}

impl From<Lab> for Lch {
    fn from(lab: Lab) -> Self {
        let h = normalize_degrees(lab.b.atan2(lab.a).to_degrees());
        Self::new(lab.l, lab.a.hypot(lab.b), h)
    }
}

impl From<Lch> for Lab {
    fn from(lch: Lch) -> Self {
        let (sin, cos) = lch.h.to_radians().sin_cos();
        Lab::new(lch.l, lch.c * cos, lch.c * sin)
    }
}

impl fmt::Display for Lch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = |v: f64| format_number(v, Self::PRECISION);
        write!(f, "lch({} {} {})", p(self.l), p(self.c), p(self.h))
    }
}
