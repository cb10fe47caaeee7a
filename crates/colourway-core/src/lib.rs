//! Colourway Core - numeric foundations for colour conversion
//!
//! This crate provides the primitives shared by every colour space:
//! - Component parsing with units (percent, degrees, gradians, radians)
//! - Precision-aware number formatting and tolerant comparison
//! - Fixed 3x3 and 3x1 matrices for tristimulus transforms

pub mod component;
pub mod error;
pub mod matrix;

pub use component::{format_number, numbers_equal, parse_number, round_half_up, DEFAULT_EPSILON};
pub use error::{CoreError, Result};
pub use matrix::{Matrix3x1, Matrix3x3};
