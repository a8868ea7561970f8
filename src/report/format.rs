//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - rounding is a presentation choice passed in explicitly, never a property of a fit

use std::time::Duration;

use crate::domain::{CurveFit, ExecutionMode, ModelKind};

/// Default number of decimal digits in reports.
pub const DEFAULT_PRECISION: usize = 3;

/// One line per fit, e.g. `F(6) = 1.000*log(6) + 0.000 = 1.793`.
pub fn format_fit(fit: &CurveFit, precision: usize) -> String {
    let x0 = fit.x0;
    let a = fmt_num(fit.params.a, precision);
    let b = fmt_num(fit.params.b, precision);
    let value = fmt_num(fit.value, precision);
    match fit.model {
        ModelKind::Logarithmic => format!("F({x0}) = {a}*log({x0}) + {b} = {value}"),
        ModelKind::Power => format!("F({x0}) = {a} * {x0}**{b} = {value}"),
    }
}

/// Format every fit of a run, one per line, in the given order.
pub fn format_fits(fits: &[CurveFit], precision: usize) -> String {
    let mut out = String::new();
    for fit in fits {
        out.push_str(&format_fit(fit, precision));
        out.push('\n');
    }
    out
}

pub fn format_run_header(mode: ExecutionMode) -> String {
    format!("Calculating {}\n", mode.display_name())
}

pub fn format_runtime(elapsed: Duration) -> String {
    format!("\nRunTime {} ms\n", elapsed.as_millis())
}

fn fmt_num(v: f64, precision: usize) -> String {
    let s = format!("{v:.precision$}");
    // Avoid printing "-0.000" for values that round to zero.
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        return s[1..].to_string();
    }
    s
}
