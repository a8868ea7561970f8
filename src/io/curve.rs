//! Read/write curve JSON files.
//!
//! Curve JSON is the "portable" representation of a run:
//! - the samples that were fitted
//! - per model: coefficients, query point and value
//! - a precomputed fitted grid over the sampled x-range for quick plotting
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::domain::{CurveFile, CurveFileEntry, CurveFit, CurveGrid, SampleSet};
use crate::error::AppError;
use crate::models::predict;

/// Number of points in the exported fitted grid.
const GRID_POINTS: usize = 101;

/// Build the in-memory curve file for a run.
pub fn build_curve_file(samples: &SampleSet, fits: &[CurveFit]) -> CurveFile {
    let (x_min, x_max) = samples.x_range().unwrap_or((1.0, 1.0));
    let fits = fits
        .iter()
        .map(|fit| CurveFileEntry {
            fit: *fit,
            grid: build_grid(fit, x_min, x_max.max(fit.x0), GRID_POINTS),
        })
        .collect();

    CurveFile {
        tool: "lsq".to_string(),
        generated_at: Utc::now(),
        samples: samples.clone(),
        fits,
    }
}

/// Write a curve JSON file.
pub fn write_curve_json(
    path: &Path,
    samples: &SampleSet,
    fits: &[CurveFit],
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create curve JSON '{}': {e}", path.display()),
        )
    })?;

    let curve = build_curve_file(samples, fits);
    serde_json::to_writer_pretty(file, &curve)
        .map_err(|e| AppError::new(2, format!("Failed to write curve JSON: {e}")))?;

    Ok(())
}

/// Read a curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to open curve JSON '{}': {e}", path.display()),
        )
    })?;
    let curve: CurveFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid curve JSON: {e}")))?;
    Ok(curve)
}

fn build_grid(fit: &CurveFit, x_min: f64, x_max: f64, n: usize) -> CurveGrid {
    let n = n.max(2);
    let mut x0 = x_min;
    let mut x1 = x_max;
    // Both families need x > 0.
    if !(x0.is_finite() && x1.is_finite()) || x0 <= 0.0 || x1 < x0 {
        x0 = fit.x0;
        x1 = fit.x0;
    }
    if (x1 - x0).abs() < 1e-9 {
        x0 = (x0 * 0.5).max(1e-6);
        x1 += 0.5;
    }

    let mut xs = Vec::with_capacity(n);
    let mut ys = Vec::with_capacity(n);

    for i in 0..n {
        let u = i as f64 / (n as f64 - 1.0);
        let x = x0 + u * (x1 - x0);
        xs.push(x);
        ys.push(predict(fit.model, fit.params, x));
    }

    CurveGrid { x: xs, y: ys }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DEFAULT_X0, default_log_samples, default_power_samples};
    use crate::fit::{fit_logarithmic, fit_power};

    #[test]
    fn grid_spans_samples_and_query_point() {
        let samples = default_power_samples();
        let fit = fit_power(&samples.x, &samples.y, DEFAULT_X0).unwrap();
        let file = build_curve_file(&samples, &[fit]);

        let grid = &file.fits[0].grid;
        assert_eq!(grid.x.len(), GRID_POINTS);
        assert_eq!(grid.x[0], 1.0);
        assert!((grid.x[GRID_POINTS - 1] - DEFAULT_X0).abs() < 1e-12);
        assert!((grid.y[GRID_POINTS - 1] - fit.value).abs() < 1e-9);
    }

    #[test]
    fn curve_json_round_trips_through_disk() {
        let log = default_log_samples();
        let fit = fit_logarithmic(&log.x, &log.y, DEFAULT_X0).unwrap();

        let path = std::env::temp_dir().join(format!("lsq-curves-{}.json", std::process::id()));
        write_curve_json(&path, &log, &[fit]).unwrap();
        let back = read_curve_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(back.tool, "lsq");
        assert_eq!(back.samples.len(), log.len());
        assert_eq!(back.fits.len(), 1);
        let saved = back.fits[0].fit;
        assert_eq!(saved.model, fit.model);
        assert!((saved.params.a - fit.params.a).abs() < 1e-12);
        assert!((saved.params.b - fit.params.b).abs() < 1e-12);
        assert!((saved.value - fit.value).abs() < 1e-12);
    }
}
