//! Mathematical utilities: the 2×3 augmented matrix, Cramer solver and linear least squares.

pub mod cramer;
pub mod matrix;
pub mod ols;

pub use cramer::*;
pub use matrix::*;
pub use ols::*;
