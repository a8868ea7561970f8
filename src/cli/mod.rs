//! Command-line parsing for the least-squares curve fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::data::DEFAULT_X0;
use crate::domain::{ExecutionMode, ModelSpec};
use crate::report::DEFAULT_PRECISION;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "lsq", version, about = "Least-squares logarithmic / power curve fitter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit the built-in tables sequentially, then concurrently, and time both runs.
    Demo(DemoArgs),
    /// Fit user-supplied samples and print (optionally export) the results.
    Fit(FitArgs),
    /// Print the fits stored in a previously exported curve JSON.
    Show(ShowArgs),
}

/// Options for the demo run.
#[derive(Debug, Parser, Clone)]
pub struct DemoArgs {
    /// Query point at which the fitted curves are evaluated.
    #[arg(long, default_value_t = DEFAULT_X0)]
    pub x0: f64,

    /// Decimal digits shown in the report.
    #[arg(short = 'p', long, default_value_t = DEFAULT_PRECISION)]
    pub precision: usize,
}

/// Options for fitting user data.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Which model(s) to fit.
    #[arg(short = 'm', long, value_enum, default_value_t = ModelSpec::All)]
    pub model: ModelSpec,

    /// Comma-separated x values (e.g. `1,2,3,4,5`).
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub x: Vec<f64>,

    /// Comma-separated y values.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub y: Vec<f64>,

    /// Samples JSON file (`{"x": [...], "y": [...], "x0": 6}`); `--x/--y/--x0` override it.
    #[arg(long, value_name = "JSON")]
    pub input: Option<PathBuf>,

    /// Query point (defaults to the input file's `x0`, else 6).
    #[arg(long, allow_hyphen_values = true)]
    pub x0: Option<f64>,

    /// Decimal digits shown in the report.
    #[arg(short = 'p', long, default_value_t = DEFAULT_PRECISION)]
    pub precision: usize,

    /// Run the model fits one after another or on separate workers.
    #[arg(long, value_enum, default_value_t = ExecutionMode::Concurrent)]
    pub mode: ExecutionMode,

    /// Export samples, coefficients and a fitted grid to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

/// Options for showing a saved curve.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Curve JSON file produced by `lsq fit --export`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    /// Decimal digits shown in the report.
    #[arg(short = 'p', long, default_value_t = DEFAULT_PRECISION)]
    pub precision: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_samples() {
        let cli = Cli::parse_from([
            "lsq", "fit", "--x", "1,2,3", "--y=-1.5,0,2", "--model", "log",
        ]);
        let Command::Fit(args) = cli.command else {
            panic!("expected fit");
        };
        assert_eq!(args.x, vec![1.0, 2.0, 3.0]);
        assert_eq!(args.y, vec![-1.5, 0.0, 2.0]);
        assert_eq!(args.model, ModelSpec::Log);
        assert_eq!(args.mode, ExecutionMode::Concurrent);
        assert_eq!(args.x0, None);
    }

    #[test]
    fn show_requires_a_curve_file() {
        assert!(Cli::try_parse_from(["lsq", "show"]).is_err());
        let cli = Cli::parse_from(["lsq", "show", "--curve", "out.json", "-p", "5"]);
        let Command::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.curve, PathBuf::from("out.json"));
        assert_eq!(args.precision, 5);
    }

    #[test]
    fn demo_defaults() {
        let cli = Cli::parse_from(["lsq", "demo"]);
        let Command::Demo(args) = cli.command else {
            panic!("expected demo");
        };
        assert_eq!(args.x0, DEFAULT_X0);
        assert_eq!(args.precision, DEFAULT_PRECISION);
    }
}
