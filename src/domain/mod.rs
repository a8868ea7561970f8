//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - sample and coefficient types (`SampleSet`, `LinearCoefficients`, `CurveParams`)
//! - fit outputs (`CurveFit`, `CurveFile`)
//! - run configuration (`ModelSpec`, `ExecutionMode`, `RunConfig`)

pub mod types;

pub use types::*;
