//! ITU T.871 (JPEG) Y'CbCr, computed from linear RGB.

use std::fmt;
use std::sync::LazyLock;

use colourway_core::{parse_number, round_half_up};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::grammar::{self, NUMBER};
use crate::linear::Linear;
use crate::model::{ColourModel, Space};

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| grammar::function("yuv", &[NUMBER, NUMBER, NUMBER], ","));

#[inline]
fn code8(v: f64) -> u8 {
    round_half_up(v * 255.0).clamp(0.0, 255.0) as u8
}

/// Luma `y` in `[0.0, 1.0]` and chroma `u`, `v` in `[-0.5, 0.5]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Yuv {
    pub y: f64,
    pub u: f64,
    pub v: f64,
}

impl Yuv {
    pub const fn new(y: f64, u: f64, v: f64) -> Self {
        Self { y, u, v }
    }

    /// 8-bit luma code.
    pub fn luma(&self) -> u8 {
        code8(self.y)
    }

    /// 8-bit blue-difference code.
    pub fn cb(&self) -> u8 {
        code8(self.u + 0.5)
    }

    /// 8-bit red-difference code.
    pub fn cr(&self) -> u8 {
        code8(self.v + 0.5)
    }
}

impl ColourModel for Yuv {
    const SPACE: Space = Space::Yuv;
    const PRECISION: f64 = 1e-2;
    const EMPTY: Self = Self::new(f64::NAN, f64::NAN, f64::NAN);

    fn components(&self) -> [f64; 3] {
        [self.y, self.u, self.v]
    }

    /// Parses 8-bit codes.
    fn parse(s: &str) -> Option<Self> {
        let [y, u, v] = grammar::captures3(&PATTERN, s)?;
        Some(Self::new(
            parse_number(y, None, None).ok()? / 255.0,
            parse_number(u, None, None).ok()? / 255.0 - 0.5,
            parse_number(v, None, None).ok()? / 255.0 - 0.5,
        ))
    }
}

impl From<Linear> for Yuv {
    fn from(lin: Linear) -> Self {
        let y = 0.299 * lin.r + 0.587 * lin.g + 0.114 * lin.b;
        let u = (-0.299 * lin.r - 0.587 * lin.g + 0.886 * lin.b) / 1.772;
        let v = (0.701 * lin.r - 0.587 * lin.g - 0.114 * lin.b) / 1.402;
        Self::new(y, u, v)
    }
}

impl From<Yuv> for Linear {
    fn from(yuv: Yuv) -> Self {
        Linear::new(
            yuv.y + 1.402 * yuv.v,
            yuv.y - (0.114 * 1.772 * yuv.u + 0.299 * 1.402 * yuv.v) / 0.587,
            yuv.y + 1.772 * yuv.u,
        )
    }
}

impl fmt::Display for Yuv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "yuv({},{},{})", self.luma(), self.cb(), self.cr())
    }
}
