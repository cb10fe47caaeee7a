//! Fixed-size 3x3 and 3x1 matrices used for linear colour transforms.

use std::ops::Mul;

use serde::{Deserialize, Serialize};

/// A 3x3 matrix in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix3x3(pub [[f64; 3]; 3]);

/// A column vector of three components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix3x1(pub [f64; 3]);

impl Matrix3x3 {
    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self(rows)
    }

    /// Apply this matrix to a triple.
    #[inline]
    pub fn apply(&self, v: [f64; 3]) -> [f64; 3] {
        let m = &self.0;
        [
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        ]
    }
}

impl Matrix3x1 {
    pub const fn new(v: [f64; 3]) -> Self {
        Self(v)
    }

    pub fn into_inner(self) -> [f64; 3] {
        self.0
    }
}

impl Mul<Matrix3x1> for Matrix3x3 {
    type Output = Matrix3x1;

    fn mul(self, rhs: Matrix3x1) -> Matrix3x1 {
        Matrix3x1(self.apply(rhs.0))
    }
}

impl From<[f64; 3]> for Matrix3x1 {
    fn from(v: [f64; 3]) -> Self {
        Self(v)
    }
}
