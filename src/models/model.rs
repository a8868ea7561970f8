//! Model transforms for the logarithmic and power families.
//!
//! Both families become a straight line after a log transform:
//!
//! - logarithmic: `y = a·ln(x) + b` is linear in `u = ln(x)`
//! - power: `ln(y) = b·ln(x) + ln(a)` is linear in `(u, v) = (ln x, ln y)`
//!
//! The fitter relies on three primitive operations implemented here for each
//! model kind: linearize the samples, map the fitted line back to `(a, b)`,
//! and predict `F(x)`.

use crate::domain::{CurveParams, LinearCoefficients, ModelKind};
use crate::error::FitError;

/// Reject the first value that is not strictly positive (or not finite).
pub fn require_positive(what: &'static str, values: &[f64]) -> Result<(), FitError> {
    match values.iter().position(|v| !(v.is_finite() && *v > 0.0)) {
        Some(i) => Err(FitError::Domain {
            what,
            index: Some(i),
            value: values[i],
        }),
        None => Ok(()),
    }
}

/// Reject a non-positive query point.
pub fn require_positive_query(x0: f64) -> Result<(), FitError> {
    if x0.is_finite() && x0 > 0.0 {
        Ok(())
    } else {
        Err(FitError::Domain {
            what: "x0",
            index: None,
            value: x0,
        })
    }
}

/// Transform samples into the space where the model is linear.
///
/// Domain checks run before any logarithm is taken.
pub fn linearize(model: ModelKind, x: &[f64], y: &[f64]) -> Result<(Vec<f64>, Vec<f64>), FitError> {
    match model {
        ModelKind::Logarithmic => {
            require_positive("x", x)?;
            Ok((x.iter().map(|v| v.ln()).collect(), y.to_vec()))
        }
        ModelKind::Power => {
            require_positive("x", x)?;
            require_positive("y", y)?;
            Ok((
                x.iter().map(|v| v.ln()).collect(),
                y.iter().map(|v| v.ln()).collect(),
            ))
        }
    }
}

/// Map the fitted line in linearized space back to model coefficients.
pub fn back_transform(model: ModelKind, line: LinearCoefficients) -> CurveParams {
    match model {
        ModelKind::Logarithmic => CurveParams {
            a: line.slope,
            b: line.intercept,
        },
        ModelKind::Power => CurveParams {
            a: line.intercept.exp(),
            b: line.slope,
        },
    }
}

/// Predict `F(x)` for the given model kind.
pub fn predict(model: ModelKind, params: CurveParams, x: f64) -> f64 {
    match model {
        ModelKind::Logarithmic => params.a * x.ln() + params.b,
        ModelKind::Power => params.a * x.powf(params.b),
    }
}
