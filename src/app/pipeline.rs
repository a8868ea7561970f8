//! Shared "fit pipeline" logic used by both the demo and the `fit` command.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! jobs -> (sequential | concurrent) fits -> results in job order
//!
//! The front-ends can then focus on presentation.

use std::time::{Duration, Instant};

use log::debug;
use rayon::prelude::*;

use crate::data::{default_log_samples, default_power_samples};
use crate::domain::{CurveFit, ExecutionMode, ModelKind, SampleSet};
use crate::error::FitError;
use crate::fit::fit_curve;

/// One independent fit-and-evaluate unit.
#[derive(Debug, Clone)]
pub struct FitJob {
    pub model: ModelKind,
    pub samples: SampleSet,
    pub x0: f64,
}

impl FitJob {
    pub fn run(&self) -> Result<CurveFit, FitError> {
        let fit = fit_curve(self.model, &self.samples, self.x0)?;
        debug!(
            "{} fit done: a={} b={} F({})={}",
            self.model.display_name(),
            fit.params.a,
            fit.params.b,
            fit.x0,
            fit.value
        );
        Ok(fit)
    }
}

/// The demo workload: logarithmic and power fits on the built-in tables.
pub fn demo_jobs(x0: f64) -> Vec<FitJob> {
    vec![
        FitJob {
            model: ModelKind::Logarithmic,
            samples: default_log_samples(),
            x0,
        },
        FitJob {
            model: ModelKind::Power,
            samples: default_power_samples(),
            x0,
        },
    ]
}

/// Fit each job with the same samples under every requested model.
pub fn jobs_for(models: &[ModelKind], samples: &SampleSet, x0: f64) -> Vec<FitJob> {
    models
        .iter()
        .map(|&model| FitJob {
            model,
            samples: samples.clone(),
            x0,
        })
        .collect()
}

/// Run every job one after the other on the calling thread.
pub fn run_sequential(jobs: &[FitJob]) -> Result<Vec<CurveFit>, FitError> {
    jobs.iter().map(FitJob::run).collect()
}

/// Run every job on its own worker and wait for all of them.
///
/// Jobs share nothing mutable, so no locking is involved. Results come back
/// in job order; if any job fails, the run fails.
pub fn run_concurrent(jobs: &[FitJob]) -> Result<Vec<CurveFit>, FitError> {
    jobs.par_iter().map(FitJob::run).collect()
}

pub fn run_jobs(jobs: &[FitJob], mode: ExecutionMode) -> Result<Vec<CurveFit>, FitError> {
    match mode {
        ExecutionMode::Sequential => run_sequential(jobs),
        ExecutionMode::Concurrent => run_concurrent(jobs),
    }
}

/// Run `f` and measure its wall-clock duration.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}
