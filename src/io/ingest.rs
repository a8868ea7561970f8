//! Sample ingest from JSON.
//!
//! Schema:
//!
//! ```json
//! { "x": [1, 2, 3, 4, 5], "y": [0.0, 0.69, 1.1, 1.4, 1.6], "x0": 6.0 }
//! ```
//!
//! `x0` is optional; the CLI supplies it when absent. Validation beyond
//! "parses as JSON" is left to the fitter so the error taxonomy stays in one place.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::SampleSet;
use crate::error::AppError;

/// On-disk sample file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleFile {
    #[serde(flatten)]
    pub samples: SampleSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x0: Option<f64>,
}

/// Read a sample JSON file.
pub fn read_samples_json(path: &Path) -> Result<SampleFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to open samples JSON '{}': {e}", path.display()),
        )
    })?;
    parse_samples(BufReader::new(file))
        .map_err(|e| AppError::new(2, format!("Invalid samples JSON '{}': {e}", path.display())))
}

fn parse_samples<R: std::io::Read>(reader: R) -> Result<SampleFile, serde_json::Error> {
    serde_json::from_reader(reader)
}
