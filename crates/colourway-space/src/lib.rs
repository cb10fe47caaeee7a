//! Colourway Space - colour space values, conversions and CIEDE2000.
//!
//! Each supported space has its own value type implementing [`ColourModel`].
//! Spaces are joined by `From` conversions along a fixed graph with linear
//! RGB and XYZ as hubs. [`Colour`] derives every space from any one of them.

pub mod colour;
pub mod error;
mod grammar;
pub mod hsl;
pub mod hwb;
pub mod lab;
pub mod lch;
pub mod linear;
pub mod model;
pub mod rgb;
pub mod value;
pub mod xyy;
pub mod xyz;
pub mod ycc;
pub mod yuv;

#[cfg(test)]
mod properties;

pub use colour::{Colour, Origin};
pub use error::{ColourError, Result};
pub use hsl::Hsl;
pub use hwb::Hwb;
pub use lab::Lab;
pub use lch::Lch;
pub use linear::{decode_srgb, encode_srgb, Linear};
pub use model::{ColourModel, Space};
pub use rgb::Rgb;
pub use value::SpaceValue;
pub use xyy::Xyy;
pub use xyz::Xyz;
pub use ycc::Ycc;
pub use yuv::Yuv;
