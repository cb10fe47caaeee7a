//! CIE L*a*b* (D50 observer) and the CIEDE2000 colour difference.

use std::f64::consts::PI;
use std::fmt;
use std::sync::LazyLock;

use colourway_core::format_number;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::grammar::{self, SIGNED};
use crate::model::{ColourModel, Space};
use crate::xyz::{Xyz, D50, D65};

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| grammar::function("lab", &[SIGNED, SIGNED, SIGNED], r"\s"));

const KAPPA: f64 = 24389.0 / 27.0;
const EPSILON: f64 = 216.0 / 24389.0;
const WHITE_X: f64 = 0.9642;
const WHITE_Z: f64 = 0.8249;
const POW25_7: f64 = 6_103_515_625.0;

/// Parse a signed component, mapping the `*` wildcard to NaN.
pub(crate) fn parse_signed(s: &str) -> Option<f64> {
    if s == "*" {
        Some(f64::NAN)
    } else {
        s.parse().ok()
    }
}

fn lab_in(v: f64) -> f64 {
    if v > EPSILON {
        v.cbrt()
    } else {
        (KAPPA * v + 16.0) / 116.0
    }
}

fn lab_out(v: f64) -> f64 {
    let v3 = v.powi(3);
    if v3 > EPSILON {
        v3
    } else {
        (116.0 * v - 16.0) / KAPPA
    }
}

/// Normalize an angle in degrees to `[0, 360)`.
pub(crate) fn normalize_degrees(mut h: f64) -> f64 {
    while h < 0.0 {
        h += 360.0;
    }
    while h >= 360.0 {
        h -= 360.0;
    }
    h
}

/// A colour in CIE L*a*b* space.
///
/// `l` runs from 0 (black) to 100 (white); `a` and `b` are unbounded but
/// typically within ±128.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    /// ΔE*₀₀ commonly cited as the just noticeable difference.
    pub const JND: f64 = 2.3;

    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// CIEDE2000 colour difference between this colour and `other`.
    ///
    /// Symmetric and non-negative; zero for identical colours.
    pub fn delta_e(&self, other: &Lab) -> f64 {
        let c1 = self.a.hypot(self.b);
        let c2 = other.a.hypot(other.b);
        let delta_l = other.l - self.l;
        let l_mean = (self.l + other.l) / 2.0;
        let c_mean = (c1 + c2) / 2.0;

        let c_mean7 = c_mean.powi(7);
        let g = 1.0 - (c_mean7 / (c_mean7 + POW25_7)).sqrt();
        let a1 = self.a + self.a / 2.0 * g;
        let a2 = other.a + other.a / 2.0 * g;
        let c1p = a1.hypot(self.b);
        let c2p = a2.hypot(other.b);
        let delta_c = c2p - c1p;
        let cp_mean = (c1p + c2p) / 2.0;

        let h1 = normalize_degrees(self.b.atan2(a1).to_degrees());
        let h2 = normalize_degrees(other.b.atan2(a2).to_degrees());
        let spread = (h1 - h2).abs();
        let achromatic = c1p == 0.0 || c2p == 0.0;

        let delta_h = if achromatic {
            0.0
        } else if spread <= 180.0 {
            h2 - h1
        } else if h2 <= h1 {
            h2 - h1 + 360.0
        } else {
            h2 - h1 - 360.0
        };
        let delta_big_h = 2.0 * (c1p * c2p).sqrt() * (delta_h.to_radians() / 2.0).sin();

        let h_mean = if achromatic {
            h1 + h2
        } else if spread <= 180.0 {
            (h1 + h2) / 2.0
        } else if h1 + h2 < 360.0 {
            (h1 + h2 + 360.0) / 2.0
        } else {
            (h1 + h2 - 360.0) / 2.0
        };

        let t = 1.0 - 0.17 * (h_mean - 30.0).to_radians().cos()
            + 0.24 * (2.0 * h_mean).to_radians().cos()
            + 0.32 * (3.0 * h_mean + 6.0).to_radians().cos()
            - 0.20 * (4.0 * h_mean - 63.0).to_radians().cos();
        let l50 = (l_mean - 50.0).powi(2);
        let s_l = 1.0 + (0.015 * l50) / (20.0 + l50).sqrt();
        let s_c = 1.0 + 0.045 * cp_mean;
        let s_h = 1.0 + 0.015 * cp_mean * t;
        let cp_mean7 = cp_mean.powi(7);
        let r_t = -2.0
            * (cp_mean7 / (cp_mean7 + POW25_7)).sqrt()
            * (60.0 * (-((h_mean - 275.0) / 25.0).powi(2)).exp() / 180.0 * PI).sin();

        let dl = delta_l / s_l;
        let dc = delta_c / s_c;
        let dh = delta_big_h / s_h;
        (dl * dl + dc * dc + dh * dh + r_t * dc * dh).sqrt()
    }
}

impl ColourModel for Lab {
    const SPACE: Space = Space::Lab;
    const PRECISION: f64 = 1e-2;
    const EMPTY: Self = Self::new(f64::NAN, f64::NAN, f64::NAN);

    fn components(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    fn parse(s: &str) -> Option<Self> {
        let [l, a, b] = grammar::captures3(&PATTERN, s)?;
        Some(Self::new(parse_signed(l)?, parse_signed(a)?, parse_signed(b)?))
    }
}

/// Adapts from D65 to D50 before applying the L*a*b* nonlinearity.
impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        let d50 = xyz.transform(&D50);
        let x = lab_in(d50.x / WHITE_X);
        let y = lab_in(d50.y);
        let z = lab_in(d50.z / WHITE_Z);
        Self::new(116.0 * y - 16.0, 500.0 * (x - y), 200.0 * (y - z))
    }
}

impl From<Lab> for Xyz {
    fn from(lab: Lab) -> Self {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = lab.a / 500.0 + fy;
        let fz = fy - lab.b / 200.0;
        let y = if lab.l > KAPPA * EPSILON {
            fy.powi(3)
        } else {
            lab.l / KAPPA
        };
        Xyz::new(lab_out(fx) * WHITE_X, y, lab_out(fz) * WHITE_Z).transform(&D65)
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = |v: f64| format_number(v, Self::PRECISION);
        write!(f, "lab({} {} {})", p(self.l), p(self.a), p(self.b))
    }
}
