//! Two-unknown linear system solver (Cramer's rule).
//!
//! For `(A | B)` we compute `D = det(A)`, `D_u` (column 0 replaced by `B`) and
//! `D_v` (column 1 replaced by `B`), and return `(D_u / D, D_v / D)`.

use nalgebra::Matrix2;

use crate::error::FitError;
use crate::math::matrix::{AugmentedMatrix, Unknown};

/// Relative tolerance below which `det(A)` is treated as zero.
pub const SINGULAR_RTOL: f64 = 1e-12;

fn det2(m: &Matrix2<f64>) -> f64 {
    m[(0, 0)] * m[(1, 1)] - m[(1, 0)] * m[(0, 1)]
}

/// Solve the 2×2 system described by `matrix`, returning `(u, v)`.
///
/// Fails with [`FitError::Singular`] when the rows are (numerically) linearly
/// dependent, and with [`FitError::Overflow`] when a well-conditioned system
/// still has a solution outside the `f64` range.
pub fn solve_2x2(matrix: &AugmentedMatrix) -> Result<(f64, f64), FitError> {
    let det = det2(&matrix.coefficients());
    if !det.is_finite() || det.abs() <= SINGULAR_RTOL * matrix.determinant_scale() {
        return Err(FitError::Singular { det });
    }

    let det_u = det2(&matrix.with_rhs_in_column(Unknown::U));
    let det_v = det2(&matrix.with_rhs_in_column(Unknown::V));

    let u = det_u / det;
    if !u.is_finite() {
        return Err(FitError::Overflow { what: "u", value: u });
    }
    let v = det_v / det;
    if !v.is_finite() {
        return Err(FitError::Overflow { what: "v", value: v });
    }

    Ok((u, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_well_conditioned_system() {
        // 2u + v = 5, u - v = 1  =>  u = 2, v = 1
        let m = AugmentedMatrix::from_rows([2.0, 1.0, 5.0], [1.0, -1.0, 1.0]);
        let (u, v) = solve_2x2(&m).unwrap();
        assert!((u - 2.0).abs() < 1e-12);
        assert!((v - 1.0).abs() < 1e-12);
    }

    #[test]
    fn solution_satisfies_both_equations() {
        let m = AugmentedMatrix::from_rows([55.0, 15.0, 205.0], [15.0, 5.0, 55.0]);
        let (u, v) = solve_2x2(&m).unwrap();
        assert!((m.a11() * u + m.a12() * v - m.b1()).abs() < 1e-9);
        assert!((m.a21() * u + m.a22() * v - m.b2()).abs() < 1e-9);
    }

    #[test]
    fn dependent_rows_are_singular() {
        let m = AugmentedMatrix::from_rows([1.0, 2.0, 3.0], [2.0, 4.0, 6.0]);
        assert!(matches!(solve_2x2(&m), Err(FitError::Singular { .. })));
    }

    #[test]
    fn all_zero_coefficients_are_singular() {
        let m = AugmentedMatrix::from_rows([0.0, 0.0, 1.0], [0.0, 0.0, 1.0]);
        assert!(matches!(solve_2x2(&m), Err(FitError::Singular { .. })));
    }

    #[test]
    fn nearly_dependent_rows_are_singular() {
        let m = AugmentedMatrix::from_rows([1.0, 1.0, 2.0], [1.0, 1.0 + 1e-15, 2.0]);
        assert!(matches!(solve_2x2(&m), Err(FitError::Singular { .. })));
    }

    #[test]
    fn huge_solution_is_overflow_not_singular() {
        // det = 1, but u = 3e308 does not fit in an f64.
        let m = AugmentedMatrix::from_rows([1.0, 1.0, 1e308], [1.0, 2.0, -1e308]);
        let err = solve_2x2(&m).unwrap_err();
        assert!(matches!(err, FitError::Overflow { what: "u", .. }), "{err:?}");
    }

    #[test]
    fn matches_nalgebra_lu_solve() {
        let m = AugmentedMatrix::from_rows([3.0, -2.0, 7.5], [0.5, 4.0, -1.25]);
        let (u, v) = solve_2x2(&m).unwrap();
        let expected = m.coefficients().lu().solve(&m.rhs()).unwrap();
        assert!((u - expected[0]).abs() < 1e-12);
        assert!((v - expected[1]).abs() < 1e-12);
    }
}
