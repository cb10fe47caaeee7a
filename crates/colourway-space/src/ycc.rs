//! ITU-R BT.2020 constant luminance Yc'CbcCrc.
//!
//! The forward transform divides the colour differences by sign-dependent
//! scale factors while the inverse uses fixed recombination coefficients, so
//! chromatic colours do not round-trip exactly. Achromatic colours do.

use std::fmt;
use std::sync::LazyLock;

use colourway_core::parse_number;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::grammar::{self, CODE12};
use crate::linear::Linear;
use crate::model::{ColourModel, Space};

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| grammar::function("ycc", &[CODE12, CODE12, CODE12], ","));

/// Luma `yc` in `[0.0, 1.0]`, chroma `cbc` and `crc` in `[-0.5, 0.5]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ycc {
    pub yc: f64,
    pub cbc: f64,
    pub crc: f64,
}

impl Ycc {
    pub const fn new(yc: f64, cbc: f64, crc: f64) -> Self {
        Self { yc, cbc, crc }
    }

    /// 12-bit luma code, nominally `[256, 3760]`.
    pub fn luma_code(&self) -> i32 {
        ((219.0 * self.yc + 16.0) * 16.0).trunc() as i32
    }

    /// 12-bit blue-difference code, nominally `[256, 3840]`.
    pub fn cb_code(&self) -> i32 {
        ((224.0 * self.cbc + 128.0) * 16.0).trunc() as i32
    }

    /// 12-bit red-difference code, nominally `[256, 3840]`.
    pub fn cr_code(&self) -> i32 {
        ((224.0 * self.crc + 128.0) * 16.0).trunc() as i32
    }
}

impl ColourModel for Ycc {
    const SPACE: Space = Space::Ycc;
    const PRECISION: f64 = 1e-4;
    const EMPTY: Self = Self::new(f64::NAN, f64::NAN, f64::NAN);

    fn components(&self) -> [f64; 3] {
        [self.yc, self.cbc, self.crc]
    }

    /// Parses 12-bit codes.
    fn parse(s: &str) -> Option<Self> {
        let [y, b, r] = grammar::captures3(&PATTERN, s)?;
        Some(Self::new(
            (parse_number(y, None, None).ok()? / 16.0 - 16.0) / 219.0,
            (parse_number(b, None, None).ok()? / 16.0 - 128.0) / 224.0,
            (parse_number(r, None, None).ok()? / 16.0 - 128.0) / 224.0,
        ))
    }
}

impl From<Linear> for Ycc {
    fn from(lin: Linear) -> Self {
        let y = 0.2627 * lin.r + 0.6780 * lin.g + 0.0593 * lin.b;
        let db = lin.b - y;
        let dr = lin.r - y;
        let cb = db / if db <= 0.0 { 1.9404 } else { 1.582 };
        let cr = dr / if dr <= 0.0 { 1.7182 } else { 0.9938 };
        Self::new(y, cb, cr)
    }
}

impl From<Ycc> for Linear {
    fn from(ycc: Ycc) -> Self {
        Linear::new(
            ycc.yc + 0.7373 * ycc.crc,
            ycc.yc - 0.0822765634218289 * ycc.cbc - 0.2856765634218289 * ycc.crc,
            ycc.yc + 0.9407 * ycc.cbc,
        )
    }
}

impl fmt::Display for Ycc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ycc({},{},{})",
            self.luma_code(),
            self.cb_code(),
            self.cr_code()
        )
    }
}
