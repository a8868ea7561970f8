//! Fixed-shape 2×3 augmented matrix `(A | B)` for a two-unknown linear system.
//!
//! ```text
//! a11*u + a12*v = b1
//! a21*u + a22*v = b2
//! ```
//!
//! Rows are equations, columns 0–1 are coefficients and column 2 is the
//! right-hand side. Access goes through named accessors so callers never index
//! rows/columns by hand.

use nalgebra::{Matrix2, Matrix2x3, Vector2};

/// Which unknown a determinant substitution targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unknown {
    U,
    V,
}

impl Unknown {
    fn column(self) -> usize {
        match self {
            Unknown::U => 0,
            Unknown::V => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AugmentedMatrix(Matrix2x3<f64>);

impl AugmentedMatrix {
    /// Build from the two equations, each given as `[coef_u, coef_v, rhs]`.
    pub fn from_rows(row0: [f64; 3], row1: [f64; 3]) -> Self {
        Self(Matrix2x3::new(row0[0], row0[1], row0[2], row1[0], row1[1], row1[2]))
    }

    pub fn a11(&self) -> f64 {
        self.0[(0, 0)]
    }

    pub fn a12(&self) -> f64 {
        self.0[(0, 1)]
    }

    pub fn a21(&self) -> f64 {
        self.0[(1, 0)]
    }

    pub fn a22(&self) -> f64 {
        self.0[(1, 1)]
    }

    pub fn b1(&self) -> f64 {
        self.0[(0, 2)]
    }

    pub fn b2(&self) -> f64 {
        self.0[(1, 2)]
    }

    /// The coefficient block `A`.
    pub fn coefficients(&self) -> Matrix2<f64> {
        Matrix2::new(self.a11(), self.a12(), self.a21(), self.a22())
    }

    /// The right-hand side `B`.
    pub fn rhs(&self) -> Vector2<f64> {
        Vector2::new(self.b1(), self.b2())
    }

    /// `A` with the column of `unknown` replaced by `B` (Cramer substitution).
    pub fn with_rhs_in_column(&self, unknown: Unknown) -> Matrix2<f64> {
        let mut m = self.coefficients();
        m.set_column(unknown.column(), &self.rhs());
        m
    }

    /// Sum of the absolute products in `det(A)`; the scale used to decide
    /// whether a determinant is numerically zero.
    pub fn determinant_scale(&self) -> f64 {
        (self.a11() * self.a22()).abs() + (self.a21() * self.a12()).abs()
    }
}
