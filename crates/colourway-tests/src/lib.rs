//! Integration test crate for Colourway.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on every colourway library crate to verify they work together.

#[cfg(test)]
mod conversion;

#[cfg(test)]
mod palettes;
