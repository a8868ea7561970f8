//! Fit-and-evaluate for a single curve family.
//!
//! Given:
//! - arguments `x_i`
//! - observed values `y_i`
//! - a query point `x0`
//!
//! we:
//! - validate shape, then domain (every logarithm argument must be > 0)
//! - linearize the samples
//! - solve the linear least-squares problem
//! - back-transform to `(a, b)` and evaluate `F(x0)`
//!
//! Everything here is pure: identical inputs give bit-identical outputs.

use crate::domain::{CurveFit, ModelKind, SampleSet};
use crate::error::FitError;
use crate::math::{check_shape, fit_linear};
use crate::models::{back_transform, linearize, predict, require_positive_query};

/// Fit `F(x) = a·ln(x) + b` and evaluate it at `x0`.
pub fn fit_logarithmic(x: &[f64], y: &[f64], x0: f64) -> Result<CurveFit, FitError> {
    fit_model(ModelKind::Logarithmic, x, y, x0)
}

/// Fit `F(x) = a·x^b` and evaluate it at `x0`.
pub fn fit_power(x: &[f64], y: &[f64], x0: f64) -> Result<CurveFit, FitError> {
    fit_model(ModelKind::Power, x, y, x0)
}

/// Fit the given model kind to a sample set.
pub fn fit_curve(model: ModelKind, samples: &SampleSet, x0: f64) -> Result<CurveFit, FitError> {
    fit_model(model, &samples.x, &samples.y, x0)
}

fn fit_model(model: ModelKind, x: &[f64], y: &[f64], x0: f64) -> Result<CurveFit, FitError> {
    check_shape(x, y)?;
    let (u, v) = linearize(model, x, y)?;
    require_positive_query(x0)?;

    let line = fit_linear(&u, &v)?;
    let params = back_transform(model, line);
    require_finite("a", params.a)?;
    require_finite("b", params.b)?;
    let value = predict(model, params, x0);
    require_finite("value", value)?;

    Ok(CurveFit {
        model,
        params,
        x0,
        value,
    })
}

fn require_finite(what: &'static str, value: f64) -> Result<(), FitError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FitError::Overflow { what, value })
    }
}
