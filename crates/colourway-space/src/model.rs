//! The behaviour shared by every colour space value type.

use std::fmt;

use colourway_core::numbers_equal;
use serde::{Deserialize, Serialize};

/// Supported colour spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Space {
    Rgb,
    Linear,
    Hsl,
    Hwb,
    Xyz,
    Xyy,
    Lab,
    Lch,
    Yuv,
    Ycc,
}

impl Space {
    /// Every space, in the order the master parser tries them.
    pub const ALL: [Space; 10] = [
        Self::Rgb,
        Self::Linear,
        Self::Hsl,
        Self::Xyz,
        Self::Xyy,
        Self::Lab,
        Self::Hwb,
        Self::Lch,
        Self::Yuv,
        Self::Ycc,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Linear => "Linear",
            Self::Hsl => "HSL",
            Self::Hwb => "HWB",
            Self::Xyz => "XYZ",
            Self::Xyy => "xyY",
            Self::Lab => "LAB",
            Self::Lch => "LCH",
            Self::Yuv => "YUV",
            Self::Ycc => "YCC",
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A triplet of components in one colour space.
///
/// Values are immutable. Parsing yields `None` when the text does not match
/// the space's grammar so that callers can fall through to another space.
pub trait ColourModel: Copy + fmt::Debug + fmt::Display + Sized {
    /// The space this type represents.
    const SPACE: Space;
    /// Default comparison tolerance and formatting precision.
    const PRECISION: f64;
    /// The empty value, with every component NaN.
    const EMPTY: Self;

    /// Normalized component values in declaration order.
    fn components(&self) -> [f64; 3];

    /// Parse the canonical text form of this space.
    fn parse(s: &str) -> Option<Self>;

    /// True iff every component is NaN.
    fn is_empty(&self) -> bool {
        self.components().iter().all(|c| c.is_nan())
    }

    /// Component-wise comparison within `epsilon`.
    fn equal_within(&self, other: &Self, epsilon: f64) -> bool {
        self.components()
            .iter()
            .zip(other.components().iter())
            .all(|(a, b)| numbers_equal(*a, *b, epsilon))
    }

    /// Comparison using the space's default tolerance.
    fn equal_to(&self, other: &Self) -> bool {
        self.equal_within(other, Self::PRECISION)
    }
}
