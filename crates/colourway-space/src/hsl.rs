//! Hue-saturation-lightness.

use std::fmt;
use std::sync::LazyLock;

use colourway_core::{format_number, parse_number, round_half_up};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::grammar::{self, HUE, NUMBER};
use crate::model::{ColourModel, Space};
use crate::rgb::Rgb;

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| grammar::function("hsl", &[HUE, NUMBER, NUMBER], ","));

/// Hue of an RGB colour as a turn fraction in `[0.0, 1.0)`, along with the
/// largest and smallest channel.
pub(crate) fn hue_of(rgb: &Rgb) -> (f64, f64, f64) {
    let max = rgb.r.max(rgb.g).max(rgb.b);
    let min = rgb.r.min(rgb.g).min(rgb.b);
    let chroma = max - min;
    let mut h = if chroma == 0.0 {
        0.0
    } else if max == rgb.r {
        (rgb.g - rgb.b) / chroma
    } else if max == rgb.g {
        (rgb.b - rgb.r) / chroma + 2.0
    } else {
        (rgb.r - rgb.g) / chroma + 4.0
    };
    h %= 6.0;
    while h < 0.0 {
        h += 6.0;
    }
    h /= 6.0;
    if h == 1.0 {
        h = 0.0;
    }
    (h, max, min)
}

/// Natural hue in whole degrees, clamped to `[0, 360]`.
pub(crate) fn hue_degrees(h: f64) -> f64 {
    round_half_up(h * 360.0).clamp(0.0, 360.0)
}

/// Proportion as a percentage clamped to `[0, 100]`.
pub(crate) fn percent(v: f64) -> f64 {
    (v * 100.0).clamp(0.0, 100.0)
}

/// A colour as hue, saturation and lightness, all in `[0.0, 1.0]`.
///
/// The hue is a fraction of a full turn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Hue in whole degrees.
    pub fn hue(&self) -> f64 {
        hue_degrees(self.h)
    }

    /// Saturation in `[0, 100]`.
    pub fn saturation(&self) -> f64 {
        percent(self.s)
    }

    /// Lightness in `[0, 100]`.
    pub fn lightness(&self) -> f64 {
        percent(self.l)
    }
}

/// Channel value for hue `h` in turns. Hues any number of turns out of
/// `[0, 1)` wrap back into it.
fn rho(m1: f64, m2: f64, h: f64) -> f64 {
    let h = h.rem_euclid(1.0);
    if h * 6.0 < 1.0 {
        m1 + (m2 - m1) * h * 6.0
    } else if h * 2.0 < 1.0 {
        m2
    } else if h * 3.0 < 2.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
    } else {
        m1
    }
}

impl ColourModel for Hsl {
    const SPACE: Space = Space::Hsl;
    const PRECISION: f64 = 1e-2;
    const EMPTY: Self = Self::new(f64::NAN, f64::NAN, f64::NAN);

    fn components(&self) -> [f64; 3] {
        [self.h, self.s, self.l]
    }

    fn parse(s: &str) -> Option<Self> {
        let [h, s, l] = grammar::captures3(&PATTERN, s)?;
        Some(Self::new(
            parse_number(h, Some(360.0), None).ok()?,
            parse_number(s, None, None).ok()?,
            parse_number(l, None, None).ok()?,
        ))
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let (h, max, min) = hue_of(&rgb);
        let l = 0.5 * (max + min);
        let s = if l == 0.0 || l == 1.0 {
            0.0
        } else {
            (max - min) / (1.0 - (2.0 * l - 1.0).abs())
        };
        Self::new(h, s, l)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        let m2 = if hsl.l <= 0.5 {
            hsl.l * (hsl.s + 1.0)
        } else {
            hsl.l + hsl.s - hsl.l * hsl.s
        };
        let m1 = hsl.l * 2.0 - m2;
        Rgb::new(
            rho(m1, m2, hsl.h + 1.0 / 3.0),
            rho(m1, m2, hsl.h),
            rho(m1, m2, hsl.h - 1.0 / 3.0),
        )
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = |v: f64| format_number(v, Self::PRECISION);
        write!(
            f,
            "hsl({},{}%,{}%)",
            p(self.h * 360.0),
            p(self.s * 100.0),
            p(self.l * 100.0)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb() {
        let rgb = Rgb::parse("#cf0").unwrap();
        let hsl = Hsl::from(rgb);
        assert_eq!(hsl.to_string(), "hsl(72,100%,50%)");
        assert!(Rgb::from(hsl).equal_to(&rgb));
    }

    #[test]
    fn test_achromatic() {
        let hsl = Hsl::from(Rgb::new(0.4, 0.4, 0.4));
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert!((hsl.l - 0.4).abs() < 1e-12);
        assert_eq!(Hsl::from(Rgb::new(1.0, 1.0, 1.0)).s, 0.0);
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(Hsl::from(Rgb::new(1.0, 0.0, 0.0)).hue(), 0.0);
        assert_eq!(Hsl::from(Rgb::new(0.0, 1.0, 0.0)).hue(), 120.0);
        assert_eq!(Hsl::from(Rgb::new(0.0, 0.0, 1.0)).hue(), 240.0);
        assert_eq!(Hsl::from(Rgb::new(1.0, 0.0, 1.0)).hue(), 300.0);
    }

    #[test]
    fn test_aliceblue() {
        let hsl = Hsl::from(Rgb::parse("#f0f8ff").unwrap());
        assert_eq!(hsl.to_string(), "hsl(208,100%,97.06%)");
    }

    #[test]
    fn test_parse_units() {
        let deg = Hsl::parse("hsl(72deg,100%,50%)").unwrap();
        let bare = Hsl::parse("hsl(72, 100%, 50%)").unwrap();
        assert!(deg.equal_to(&bare));
        assert!((bare.h - 0.2).abs() < 1e-12);
        assert_eq!(bare.saturation(), 100.0);
        let rad = Hsl::parse("hsl(3.14159rad,50%,50%)").unwrap();
        assert!((rad.h - 0.5).abs() < 1e-5);
        assert!(Hsl::parse("hsl(72grad,100%,50%)").is_none());
    }

    #[test]
    fn test_natural_values_clamp() {
        let hsl = Hsl::new(1.2, 1.5, -0.2);
        assert_eq!(hsl.hue(), 360.0);
        assert_eq!(hsl.saturation(), 100.0);
        assert_eq!(hsl.lightness(), 0.0);
    }

    #[test]
    fn test_hue_wraps_many_turns() {
        let base = Rgb::from(Hsl::new(0.25, 1.0, 0.5));
        assert!(Rgb::from(Hsl::new(2.25, 1.0, 0.5)).equal_within(&base, 1e-9));
        assert!(Rgb::from(Hsl::new(-1.75, 1.0, 0.5)).equal_within(&base, 1e-9));

        let hsl = Hsl::parse("hsl(999.9rad,100%,50%)").unwrap();
        let wrapped = Hsl::new(hsl.h.rem_euclid(1.0), 1.0, 0.5);
        let rgb = Rgb::from(hsl);
        assert!(rgb.equal_within(&Rgb::from(wrapped), 1e-9));
        assert!(!rgb.equal_to(&Rgb::new(0.0, 0.0, 0.0)));
    }

}
