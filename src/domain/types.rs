//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - read from / exported to JSON
//! - shared between sequential and concurrent runs without synchronization

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Paired observations `(x_i, y_i)`.
///
/// The fitting core only ever borrows these as slices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl SampleSet {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { x, y }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// `(min, max)` of the x values, if any are finite.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let mut finite = self.x.iter().copied().filter(|v| v.is_finite());
        let first = finite.next()?;
        Some(finite.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

/// Coefficients of `F(x) = slope·x + intercept` (the pair `(a1, a0)`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearCoefficients {
    pub slope: f64,
    pub intercept: f64,
}

/// Curve family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// `F(x) = a·ln(x) + b`
    Logarithmic,
    /// `F(x) = a·x^b`
    Power,
}

impl ModelKind {
    pub const ALL: [ModelKind; 2] = [ModelKind::Logarithmic, ModelKind::Power];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::Logarithmic => "logarithmic",
            ModelKind::Power => "power",
        }
    }
}

/// Which model(s) to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelSpec {
    Log,
    Power,
    All,
}

impl ModelSpec {
    pub fn kinds(self) -> Vec<ModelKind> {
        match self {
            ModelSpec::Log => vec![ModelKind::Logarithmic],
            ModelSpec::Power => vec![ModelKind::Power],
            ModelSpec::All => ModelKind::ALL.to_vec(),
        }
    }
}

/// How independent fits are dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// One after the other on the calling thread.
    Sequential,
    /// Every fit on its own worker, joined before reporting.
    Concurrent,
}

impl ExecutionMode {
    pub fn display_name(self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "without threads",
            ExecutionMode::Concurrent => "with threads",
        }
    }
}

/// Model coefficients after back-transform.
///
/// - logarithmic: `F(x) = a·ln(x) + b`
/// - power: `F(x) = a·x^b`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveParams {
    pub a: f64,
    pub b: f64,
}

/// Output of one fit-and-evaluate call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveFit {
    pub model: ModelKind,
    pub params: CurveParams,
    /// Query point.
    pub x0: f64,
    /// Fitted curve evaluated at `x0`.
    pub value: f64,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub models: ModelSpec,
    pub samples: SampleSet,
    pub x0: f64,
    /// Decimal digits shown in reports. Never affects the fitted numbers.
    pub precision: usize,
    pub mode: ExecutionMode,
    pub export: Option<PathBuf>,
}

/// A saved fit (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub samples: SampleSet,
    pub fits: Vec<CurveFileEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFileEntry {
    pub fit: CurveFit,
    pub grid: CurveGrid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveGrid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_range_skips_non_finite() {
        let s = SampleSet::new(vec![3.0, f64::NAN, 1.0, 5.0], vec![0.0; 4]);
        assert_eq!(s.x_range(), Some((1.0, 5.0)));
        assert_eq!(SampleSet::new(vec![], vec![]).x_range(), None);
    }

    #[test]
    fn model_spec_expands_to_kinds() {
        assert_eq!(ModelSpec::Log.kinds(), vec![ModelKind::Logarithmic]);
        assert_eq!(ModelSpec::All.kinds(), ModelKind::ALL.to_vec());
    }
}
