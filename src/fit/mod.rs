//! Curve fitting.
//!
//! Responsibilities:
//!
//! - validate samples for the chosen model
//! - fit the linearized problem by least squares
//! - back-transform and evaluate at the query point

pub mod fitter;

pub use fitter::*;
