//! Companded sRGB colours with hexadecimal and `rgb()` notations.

use std::fmt;
use std::sync::LazyLock;

use colourway_core::{format_number, numbers_equal, parse_number, round_half_up};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::grammar::{self, NUMBER};
use crate::model::{ColourModel, Space};

static HEX6: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*#([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})(?:[0-9A-Fa-f]{2})?\s*$")
        .expect("valid regex")
});
static HEX3: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*#([0-9A-Fa-f])([0-9A-Fa-f])([0-9A-Fa-f])\s*$").expect("valid regex")
});
static DEC: LazyLock<Regex> =
    LazyLock::new(|| grammar::function("rgb", &[NUMBER, NUMBER, NUMBER], ","));
static DECA: LazyLock<Regex> =
    LazyLock::new(|| grammar::function("rgba", &[NUMBER, NUMBER, NUMBER, NUMBER], ","));

/// An sRGB triplet, each channel normally in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Natural 8-bit value of a normalized channel.
#[inline]
fn natural(v: f64) -> u8 {
    round_half_up(v * 255.0).clamp(0.0, 255.0) as u8
}

#[inline]
fn is_doubled_nibble(v: u8) -> bool {
    v >> 4 == v & 0xF
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Construct from 8-bit channel values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(f64::from(r) / 255.0, f64::from(g) / 255.0, f64::from(b) / 255.0)
    }

    /// Red in `[0, 255]`.
    pub fn red(&self) -> u8 {
        natural(self.r)
    }

    /// Green in `[0, 255]`.
    pub fn green(&self) -> u8 {
        natural(self.g)
    }

    /// Blue in `[0, 255]`.
    pub fn blue(&self) -> u8 {
        natural(self.b)
    }

    pub fn to_rgb8(&self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()]
    }

    /// Parse `#rrggbb`, `#rrggbbaa` or `#rgb`. Alpha is discarded.
    pub fn parse_hex(s: &str) -> Option<Self> {
        if let Some(caps) = HEX6.captures(s) {
            let channel = |i: usize| u8::from_str_radix(caps.get(i)?.as_str(), 16).ok();
            return Some(Self::from_rgb8(channel(1)?, channel(2)?, channel(3)?));
        }
        let caps = HEX3.captures(s)?;
        let channel = |i: usize| {
            u8::from_str_radix(caps.get(i)?.as_str(), 16)
                .ok()
                .map(|n| n << 4 | n)
        };
        Some(Self::from_rgb8(channel(1)?, channel(2)?, channel(3)?))
    }

    /// Parse `rgb(r,g,b)` or `rgba(r,g,b,a)` with channels in `[0, 255]` or
    /// percentages. Alpha is discarded.
    pub fn parse_rgb(s: &str) -> Option<Self> {
        let [r, g, b] =
            grammar::captures3(&DEC, s).or_else(|| grammar::captures3(&DECA, s))?;
        let channel = |v: &str| parse_number(v, Some(255.0), Some(0.0)).ok();
        Some(Self::new(channel(r)?, channel(g)?, channel(b)?))
    }

    /// Format as `#rgb` when lossless, otherwise `#rrggbb`.
    pub fn to_hex_string(&self, always6: bool) -> String {
        let [r, g, b] = self.to_rgb8();
        if !always6 && is_doubled_nibble(r) && is_doubled_nibble(g) && is_doubled_nibble(b) {
            format!("#{:x}{:x}{:x}", r & 0xF, g & 0xF, b & 0xF)
        } else {
            format!("#{r:02x}{g:02x}{b:02x}")
        }
    }

    /// Format as `rgb()` with integer channels or, if `percent`, percentages.
    pub fn to_rgb_string(&self, percent: bool) -> String {
        if percent {
            let p = |v: f64| format_number(v * 100.0, Self::PRECISION);
            format!("rgb({}%,{}%,{}%)", p(self.r), p(self.g), p(self.b))
        } else {
            let n = |v: f64| format_number(v * 255.0, 1.0);
            format!("rgb({},{},{})", n(self.r), n(self.g), n(self.b))
        }
    }

    /// True if every channel is within `[0.0, 1.0]`.
    pub fn is_clipped(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|v| (0.0..=1.0).contains(v))
    }

    /// True if `#rrggbb` represents this colour without loss.
    pub fn is_hexable(&self) -> bool {
        self.is_clipped()
            && [self.r, self.g, self.b].iter().all(|v| {
                let scaled = v * 255.0;
                scaled.trunc() == scaled
            })
    }

    /// True if `#rgb` represents this colour without loss.
    pub fn is_hexable3(&self) -> bool {
        self.is_hexable() && self.to_rgb8().into_iter().all(is_doubled_nibble)
    }

    /// Clamp every channel to `[0.0, 1.0]`.
    pub fn clip(&self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// Snap to the nearest colour expressible as `#rrggbb`.
    pub fn clip6(&self) -> Self {
        let [r, g, b] = self.to_rgb8();
        Self::from_rgb8(r, g, b)
    }

    /// Snap to the nearest colour expressible as `#rgb`.
    pub fn clip3(&self) -> Self {
        let nibble = |v: u8| {
            let n = round_half_up(f64::from(v) / 17.0).min(15.0) as u8;
            n << 4 | n
        };
        let [r, g, b] = self.to_rgb8();
        Self::from_rgb8(nibble(r), nibble(g), nibble(b))
    }

    /// Pack as a 32-bit `0xAARRGGBB` value.
    pub fn to_argb(&self, alpha: u8) -> u32 {
        let [r, g, b] = self.to_rgb8();
        u32::from(alpha) << 24 | u32::from(r) << 16 | u32::from(g) << 8 | u32::from(b)
    }

    /// Unpack a 32-bit `0xAARRGGBB` value, ignoring alpha.
    pub fn from_argb(argb: u32) -> Self {
        Self::from_rgb8((argb >> 16) as u8, (argb >> 8) as u8, argb as u8)
    }
}

impl ColourModel for Rgb {
    const SPACE: Space = Space::Rgb;
    const PRECISION: f64 = 1e-2;
    const EMPTY: Self = Self::new(f64::NAN, f64::NAN, f64::NAN);

    fn components(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    fn parse(s: &str) -> Option<Self> {
        Self::parse_hex(s).or_else(|| Self::parse_rgb(s))
    }

    /// Compares the natural 8-bit channel values.
    fn equal_to(&self, other: &Self) -> bool {
        self.to_rgb8() == other.to_rgb8()
    }

    fn equal_within(&self, other: &Self, epsilon: f64) -> bool {
        numbers_equal(self.r, other.r, epsilon)
            && numbers_equal(self.g, other.g, epsilon)
            && numbers_equal(self.b, other.b, epsilon)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_hexable() {
            f.write_str(&self.to_hex_string(false))
        } else {
            f.write_str(&self.to_rgb_string(false))
        }
    }
}
