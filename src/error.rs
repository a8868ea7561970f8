//! Error types.
//!
//! - `FitError`: typed failures of the fitting core (shape, domain, singular system)
//! - `AppError`: what the binary reports (exit code + message)

/// Failure of a single fit.
///
/// Every variant is a deterministic function of the inputs; nothing is retried.
#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    /// Mismatched or too-short sample sequences.
    Shape { x_len: usize, y_len: usize },
    /// A value outside the domain of the transform (e.g. `ln` of a non-positive number).
    Domain {
        what: &'static str,
        index: Option<usize>,
        value: f64,
    },
    /// The normal equations have a zero (or numerically zero) determinant.
    Singular { det: f64 },
    /// A coefficient or the evaluated value does not fit in an `f64`.
    Overflow { what: &'static str, value: f64 },
}

impl FitError {
    pub fn exit_code(&self) -> u8 {
        match self {
            FitError::Domain { .. } => 2,
            FitError::Shape { .. } => 3,
            FitError::Singular { .. } | FitError::Overflow { .. } => 4,
        }
    }
}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitError::Shape { x_len, y_len } if x_len != y_len => write!(
                f,
                "Sample length mismatch: x has {x_len} values, y has {y_len}."
            ),
            FitError::Shape { x_len, .. } => {
                write!(f, "Insufficient data: n={x_len} (need at least 2 points).")
            }
            FitError::Domain {
                what,
                index: Some(i),
                value,
            } => write!(f, "Domain error: {what}[{i}] = {value} is out of range."),
            FitError::Domain {
                what,
                index: None,
                value,
            } => write!(f, "Domain error: {what} = {value} is out of range."),
            FitError::Singular { det } => write!(
                f,
                "Singular system: normal-equations determinant is {det:e} \
                 (are all x values equal?)."
            ),
            FitError::Overflow { what, value } => {
                write!(f, "Numeric overflow: {what} = {value} is not representable.")
            }
        }
    }
}

impl std::error::Error for FitError {}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
