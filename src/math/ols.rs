//! Simple linear least squares: `y ≈ a1·x + a0`.
//!
//! We minimize `Σ (a1·x_i + a0 - y_i)^2` by solving the normal equations
//!
//! ```text
//! [ Σx²  Σx ] [a1]   [ Σxy ]
//! [ Σx   n  ] [a0] = [ Σy  ]
//! ```
//!
//! with the 2×2 Cramer solver. The system is tiny, so accumulating the sums in a
//! single pass is all the work there is.

use crate::domain::LinearCoefficients;
use crate::error::FitError;
use crate::math::cramer::solve_2x2;
use crate::math::matrix::AugmentedMatrix;

/// Fit `y = slope·x + intercept` to paired samples.
pub fn fit_linear(x: &[f64], y: &[f64]) -> Result<LinearCoefficients, FitError> {
    check_shape(x, y)?;
    check_finite("x", x)?;
    check_finite("y", y)?;

    let matrix = normal_equations(x, y);
    let (slope, intercept) = solve_2x2(&matrix)?;

    Ok(LinearCoefficients { slope, intercept })
}

/// Require equal lengths and at least two points.
pub fn check_shape(x: &[f64], y: &[f64]) -> Result<(), FitError> {
    if x.len() != y.len() || x.len() < 2 {
        return Err(FitError::Shape {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    Ok(())
}

fn check_finite(what: &'static str, values: &[f64]) -> Result<(), FitError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(FitError::Domain {
            what,
            index: Some(i),
            value: values[i],
        }),
        None => Ok(()),
    }
}

fn normal_equations(x: &[f64], y: &[f64]) -> AugmentedMatrix {
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_xy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        sum_x += xi;
        sum_y += yi;
        sum_xx += xi * xi;
        sum_xy += xi * yi;
    }
    let n = x.len() as f64;

    AugmentedMatrix::from_rows([sum_xx, sum_x, sum_xy], [sum_x, n, sum_y])
}
