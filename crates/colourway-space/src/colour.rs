//! A colour with its representation in every supported space.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColourError;
use crate::hsl::Hsl;
use crate::hwb::Hwb;
use crate::lab::Lab;
use crate::lch::Lch;
use crate::linear::Linear;
use crate::model::{ColourModel, Space};
use crate::rgb::Rgb;
use crate::value::SpaceValue;
use crate::xyy::Xyy;
use crate::xyz::Xyz;
use crate::ycc::Ycc;
use crate::yuv::Yuv;

/// Where a colour came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    /// Defined directly in a colour space.
    Space(Space),
    /// Looked up in the named palette.
    Palette(String),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(space) => f.write_str(space.name()),
            Self::Palette(name) => f.write_str(name),
        }
    }
}

/// A colour defined in one space, with every other space derived eagerly.
///
/// The derived values are immutable and consistent with the defining value
/// up to each space's precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Colour {
    name: Option<String>,
    origin: Origin,
    defn: SpaceValue,
    rgb: Rgb,
    lin: Linear,
    hsl: Hsl,
    hwb: Hwb,
    xyz: Xyz,
    xyy: Xyy,
    lab: Lab,
    lch: Lch,
    yuv: Yuv,
    ycc: Ycc,
}

/// Derivation state, filled in from the defining value outwards.
struct Derived {
    rgb: Rgb,
    lin: Linear,
    xyz: Xyz,
    lab: Lab,
}

impl Derived {
    fn from_rgb(rgb: Rgb) -> Self {
        let lin = Linear::from(rgb);
        Self::from_rgb_lin(rgb, lin)
    }

    fn from_linear(lin: Linear) -> Self {
        Self::from_rgb_lin(Rgb::from(lin), lin)
    }

    fn from_rgb_lin(rgb: Rgb, lin: Linear) -> Self {
        let xyz = Xyz::from(lin);
        Self { rgb, lin, xyz, lab: Lab::from(xyz) }
    }

    fn from_xyz(xyz: Xyz) -> Self {
        let lin = Linear::from(xyz);
        Self { rgb: Rgb::from(lin), lin, xyz, lab: Lab::from(xyz) }
    }

    fn from_lab(lab: Lab) -> Self {
        let xyz = Xyz::from(lab);
        let lin = Linear::from(xyz);
        Self { rgb: Rgb::from(lin), lin, xyz, lab }
    }
}

impl Colour {
    /// Build a colour from a value in any space.
    pub fn new(defn: impl Into<SpaceValue>) -> Self {
        let defn = defn.into();
        let derived = match defn {
            SpaceValue::Rgb(rgb) => Derived::from_rgb(rgb),
            SpaceValue::Linear(lin) => Derived::from_linear(lin),
            SpaceValue::Hsl(hsl) => Derived::from_rgb(Rgb::from(hsl)),
            SpaceValue::Hwb(hwb) => Derived::from_rgb(Rgb::from(hwb)),
            SpaceValue::Xyz(xyz) => Derived::from_xyz(xyz),
            SpaceValue::Xyy(xyy) => Derived::from_xyz(Xyz::from(xyy)),
            SpaceValue::Lab(lab) => Derived::from_lab(lab),
            SpaceValue::Lch(lch) => Derived::from_lab(Lab::from(lch)),
            SpaceValue::Yuv(yuv) => Derived::from_linear(Linear::from(yuv)),
            SpaceValue::Ycc(ycc) => Derived::from_linear(Linear::from(ycc)),
        };
        let Derived { rgb, lin, xyz, lab } = derived;

        Self {
            name: None,
            origin: Origin::Space(defn.space()),
            hsl: match defn {
                SpaceValue::Hsl(hsl) => hsl,
                _ => Hsl::from(rgb),
            },
            hwb: match defn {
                SpaceValue::Hwb(hwb) => hwb,
                _ => Hwb::from(rgb),
            },
            xyy: match defn {
                SpaceValue::Xyy(xyy) => xyy,
                _ => Xyy::from(xyz),
            },
            lch: match defn {
                SpaceValue::Lch(lch) => lch,
                _ => Lch::from(lab),
            },
            yuv: match defn {
                SpaceValue::Yuv(yuv) => yuv,
                _ => Yuv::from(lin),
            },
            ycc: match defn {
                SpaceValue::Ycc(ycc) => ycc,
                _ => Ycc::from(lin),
            },
            defn,
            rgb,
            lin,
            xyz,
            lab,
        }
    }

    /// Parse text in any supported notation. Returns `None` if no grammar matches.
    pub fn parse(s: &str) -> Option<Self> {
        SpaceValue::parse(s).map(Self::new)
    }

    /// Attach a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Record the colour's provenance.
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// The value the colour was defined with.
    pub fn definition(&self) -> &SpaceValue {
        &self.defn
    }

    /// The space the colour was defined in.
    pub fn space(&self) -> Space {
        self.defn.space()
    }

    pub fn rgb(&self) -> &Rgb {
        &self.rgb
    }

    pub fn linear(&self) -> &Linear {
        &self.lin
    }

    pub fn hsl(&self) -> &Hsl {
        &self.hsl
    }

    pub fn hwb(&self) -> &Hwb {
        &self.hwb
    }

    pub fn xyz(&self) -> &Xyz {
        &self.xyz
    }

    pub fn xyy(&self) -> &Xyy {
        &self.xyy
    }

    pub fn lab(&self) -> &Lab {
        &self.lab
    }

    pub fn lch(&self) -> &Lch {
        &self.lch
    }

    pub fn yuv(&self) -> &Yuv {
        &self.yuv
    }

    pub fn ycc(&self) -> &Ycc {
        &self.ycc
    }

    /// The value of this colour in `space`.
    pub fn value_in(&self, space: Space) -> SpaceValue {
        match space {
            Space::Rgb => self.rgb.into(),
            Space::Linear => self.lin.into(),
            Space::Hsl => self.hsl.into(),
            Space::Hwb => self.hwb.into(),
            Space::Xyz => self.xyz.into(),
            Space::Xyy => self.xyy.into(),
            Space::Lab => self.lab.into(),
            Space::Lch => self.lch.into(),
            Space::Yuv => self.yuv.into(),
            Space::Ycc => self.ycc.into(),
        }
    }

    /// CIEDE2000 difference to `other`.
    pub fn delta_e(&self, other: &Colour) -> f64 {
        self.lab.delta_e(&other.lab)
    }

    /// Compare with `other`.
    ///
    /// Without a threshold the natural 8-bit RGB values must match. With one,
    /// the ΔE*₀₀ distance must be strictly below it.
    pub fn equal_to(&self, other: &Colour, delta_e: Option<f64>) -> bool {
        match delta_e {
            None => self.rgb.equal_to(&other.rgb),
            Some(threshold) => self.delta_e(other) < threshold,
        }
    }
}

impl FromStr for Colour {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ColourError::Unparseable(s.to_string()))
    }
}

impl From<SpaceValue> for Colour {
    fn from(value: SpaceValue) -> Self {
        Self::new(value)
    }
}

/// Shows the name if the colour has one, else the defining value.
impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => f.write_str(name),
            None => fmt::Display::fmt(&self.defn, f),
        }
    }
}
