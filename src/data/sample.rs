//! Built-in demo samples.
//!
//! Two small tables over the same arguments `x = 1..=5`: one shaped like a
//! logarithm, one growing roughly like a power law. Both are evaluated at
//! `x0 = 6`, just past the sampled range.

use crate::domain::SampleSet;

/// Query point used by the demo.
pub const DEFAULT_X0: f64 = 6.0;

const DEMO_X: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
const DEMO_Y_LOG: [f64; 5] = [0.0, 0.69, 1.1, 1.4, 1.6];
const DEMO_Y_POWER: [f64; 5] = [0.6, 1.8, 5.5, 9.9, 18.2];

/// Samples for the logarithmic demo fit.
pub fn default_log_samples() -> SampleSet {
    SampleSet::new(DEMO_X.to_vec(), DEMO_Y_LOG.to_vec())
}

/// Samples for the power demo fit.
pub fn default_power_samples() -> SampleSet {
    SampleSet::new(DEMO_X.to_vec(), DEMO_Y_POWER.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::{fit_logarithmic, fit_power};

    #[test]
    fn demo_samples_fit_cleanly() {
        let log = default_log_samples();
        let pow = default_power_samples();
        assert_eq!(log.x, pow.x);

        let a = fit_logarithmic(&log.x, &log.y, DEFAULT_X0).unwrap();
        let b = fit_power(&pow.x, &pow.y, DEFAULT_X0).unwrap();
        assert!(a.value.is_finite() && b.value.is_finite());
        // Both tables increase, so the extrapolation lies above the last sample.
        assert!(a.value > 1.6);
        assert!(b.value > 18.2);
    }
}
