//! A value in any one of the supported colour spaces.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hsl::Hsl;
use crate::hwb::Hwb;
use crate::lab::Lab;
use crate::lch::Lch;
use crate::linear::Linear;
use crate::model::{ColourModel, Space};
use crate::rgb::Rgb;
use crate::xyy::Xyy;
use crate::xyz::Xyz;
use crate::ycc::Ycc;
use crate::yuv::Yuv;

/// A colour expressed in exactly one space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "space", rename_all = "lowercase")]
pub enum SpaceValue {
    Rgb(Rgb),
    Linear(Linear),
    Hsl(Hsl),
    Hwb(Hwb),
    Xyz(Xyz),
    Xyy(Xyy),
    Lab(Lab),
    Lch(Lch),
    Yuv(Yuv),
    Ycc(Ycc),
}

type Parser = fn(&str) -> Option<SpaceValue>;

fn parse_as<M: ColourModel + Into<SpaceValue>>(s: &str) -> Option<SpaceValue> {
    M::parse(s).map(Into::into)
}

/// Grammars tried by [`SpaceValue::parse`], first match wins.
const PARSERS: [Parser; 10] = [
    parse_as::<Rgb>,
    parse_as::<Linear>,
    parse_as::<Hsl>,
    parse_as::<Xyz>,
    parse_as::<Xyy>,
    parse_as::<Lab>,
    parse_as::<Hwb>,
    parse_as::<Lch>,
    parse_as::<Yuv>,
    parse_as::<Ycc>,
];

macro_rules! dispatch {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            SpaceValue::Rgb($inner) => $body,
            SpaceValue::Linear($inner) => $body,
            SpaceValue::Hsl($inner) => $body,
            SpaceValue::Hwb($inner) => $body,
            SpaceValue::Xyz($inner) => $body,
            SpaceValue::Xyy($inner) => $body,
            SpaceValue::Lab($inner) => $body,
            SpaceValue::Lch($inner) => $body,
            SpaceValue::Yuv($inner) => $body,
            SpaceValue::Ycc($inner) => $body,
        }
    };
}

impl SpaceValue {
    /// Parse text in any supported notation.
    ///
    /// Grammars are tried in the order RGB (hex, then `rgb()`), Linear, HSL,
    /// XYZ, xyY, LAB, HWB, LCH, YUV and YCC.
    pub fn parse(s: &str) -> Option<Self> {
        PARSERS.iter().find_map(|parse| parse(s))
    }

    /// The space this value is expressed in.
    pub fn space(&self) -> Space {
        match self {
            Self::Rgb(_) => Space::Rgb,
            Self::Linear(_) => Space::Linear,
            Self::Hsl(_) => Space::Hsl,
            Self::Hwb(_) => Space::Hwb,
            Self::Xyz(_) => Space::Xyz,
            Self::Xyy(_) => Space::Xyy,
            Self::Lab(_) => Space::Lab,
            Self::Lch(_) => Space::Lch,
            Self::Yuv(_) => Space::Yuv,
            Self::Ycc(_) => Space::Ycc,
        }
    }

    pub fn components(&self) -> [f64; 3] {
        dispatch!(self, v => v.components())
    }

    pub fn is_empty(&self) -> bool {
        dispatch!(self, v => v.is_empty())
    }
}

impl fmt::Display for SpaceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, v => fmt::Display::fmt(v, f))
    }
}

macro_rules! impl_from_model {
    ($($model:ident),*) => {
        $(
            impl From<$model> for SpaceValue {
                fn from(v: $model) -> Self {
                    SpaceValue::$model(v)
                }
            }
        )*
    };
}

impl_from_model!(Rgb, Linear, Hsl, Hwb, Xyz, Xyy, Lab, Lch, Yuv, Ycc);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_each_grammar() {
        let cases = [
            ("#ff6347", Space::Rgb),
            ("rgba(1,2,3,0.5)", Space::Rgb),
            ("lin(0.5,0.5,0.5)", Space::Linear),
            ("hsl(120,50%,50%)", Space::Hsl),
            ("hwb(120,10%,10%)", Space::Hwb),
            ("xyz(0.4,0.3,0.2)", Space::Xyz),
            ("xyy(0.3,0.3,0.5)", Space::Xyy),
            ("lab(50 10 -10)", Space::Lab),
            ("lch(50 10 200)", Space::Lch),
            ("yuv(128,128,128)", Space::Yuv),
            ("ycc(2000,2048,2048)", Space::Ycc),
        ];
        for (text, space) in cases {
            let value = SpaceValue::parse(text).unwrap();
            assert_eq!(value.space(), space, "{text}");
        }
    }

    #[test]
    fn test_unparseable() {
        assert!(SpaceValue::parse("tomato").is_none());
        assert!(SpaceValue::parse("").is_none());
        assert!(SpaceValue::parse("cmyk(0,0,0,0)").is_none());
    }

    #[test]
    fn test_display_delegates() {
        let value = SpaceValue::from(Lab::new(35.0, 35.0, 35.0));
        assert_eq!(value.to_string(), "lab(35 35 35)");
        assert_eq!(value.components(), [35.0, 35.0, 35.0]);
        assert!(SpaceValue::from(Rgb::EMPTY).is_empty());
    }
}
