//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - builds fit jobs (built-in demo tables or user samples)
//! - runs them sequentially or concurrently, with timing
//! - prints reports and writes optional exports

use clap::Parser;
use log::info;

use crate::cli::{Command, DemoArgs, FitArgs, ShowArgs};
use crate::data::DEFAULT_X0;
use crate::domain::{CurveFile, CurveFit, ExecutionMode, RunConfig, SampleSet};
use crate::error::AppError;
use crate::report::{format_fits, format_run_header, format_runtime};

pub mod pipeline;

/// Entry point for the `lsq` binary.
pub fn run() -> Result<(), AppError> {
    // `lsq` with no subcommand runs the demo. Clap requires a subcommand name,
    // so we rewrite argv before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Demo(args) => handle_demo(args),
        Command::Fit(args) => handle_fit(args),
        Command::Show(args) => handle_show(args),
    }
}

fn handle_demo(args: DemoArgs) -> Result<(), AppError> {
    let jobs = pipeline::demo_jobs(args.x0);

    for mode in [ExecutionMode::Sequential, ExecutionMode::Concurrent] {
        info!("demo run: {} job(s), mode={mode:?}", jobs.len());
        println!("{}", format_run_header(mode));

        let (result, elapsed) = pipeline::timed(|| pipeline::run_jobs(&jobs, mode));
        let fits = result?;

        print!("{}", format_fits(&fits, args.precision));
        println!("{}", format_runtime(elapsed));
        info!("demo run finished in {elapsed:?}");
    }

    Ok(())
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = run_config_from_args(&args)?;
    let jobs = pipeline::jobs_for(&config.models.kinds(), &config.samples, config.x0);
    info!(
        "fitting n={} sample(s) with {} model(s), mode={:?}",
        config.samples.len(),
        jobs.len(),
        config.mode
    );

    let (result, elapsed) = pipeline::timed(|| pipeline::run_jobs(&jobs, config.mode));
    let fits = result?;
    info!("fit finished in {elapsed:?}");

    print!("{}", format_fits(&fits, config.precision));

    if let Some(path) = &config.export {
        crate::io::curve::write_curve_json(path, &config.samples, &fits)?;
        info!("wrote {}", path.display());
    }

    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let curve = crate::io::curve::read_curve_json(&args.curve)?;
    info!(
        "{} fit(s) from {} generated at {}",
        curve.fits.len(),
        curve.tool,
        curve.generated_at
    );
    print!("{}", format_saved_fits(&curve, args.precision));
    Ok(())
}

fn format_saved_fits(curve: &CurveFile, precision: usize) -> String {
    let fits: Vec<CurveFit> = curve.fits.iter().map(|entry| entry.fit).collect();
    format_fits(&fits, precision)
}

/// Merge CLI flags with an optional samples file into a `RunConfig`.
///
/// Flags win over file values.
pub fn run_config_from_args(args: &FitArgs) -> Result<RunConfig, AppError> {
    let file = match &args.input {
        Some(path) => Some(crate::io::ingest::read_samples_json(path)?),
        None => None,
    };

    let (file_samples, file_x0) = match file {
        Some(f) => (Some(f.samples), f.x0),
        None => (None, None),
    };

    let x = if args.x.is_empty() {
        file_samples.as_ref().map(|s| s.x.clone()).unwrap_or_default()
    } else {
        args.x.clone()
    };
    let y = if args.y.is_empty() {
        file_samples.as_ref().map(|s| s.y.clone()).unwrap_or_default()
    } else {
        args.y.clone()
    };

    if x.is_empty() && y.is_empty() {
        return Err(AppError::new(
            2,
            "No samples given: pass --x and --y, or --input <JSON>.",
        ));
    }

    Ok(RunConfig {
        models: args.model,
        samples: SampleSet::new(x, y),
        x0: args.x0.or(file_x0).unwrap_or(DEFAULT_X0),
        precision: args.precision,
        mode: args.mode,
        export: args.export.clone(),
    })
}

/// Rewrite argv so `lsq` defaults to `lsq demo`.
///
/// Rules:
/// - `lsq`                      -> `lsq demo`
/// - `lsq -p 5 ...`             -> `lsq demo -p 5 ...`
/// - `lsq --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("demo".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "demo".to_string());
    }

    argv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelSpec;

    fn fit_args(x: &[f64], y: &[f64]) -> FitArgs {
        FitArgs {
            model: ModelSpec::All,
            x: x.to_vec(),
            y: y.to_vec(),
            input: None,
            x0: None,
            precision: 3,
            mode: ExecutionMode::Sequential,
            export: None,
        }
    }

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_runs_demo() {
        assert_eq!(rewrite_args(argv(&["lsq"])), argv(&["lsq", "demo"]));
        assert_eq!(
            rewrite_args(argv(&["lsq", "-p", "5"])),
            argv(&["lsq", "demo", "-p", "5"])
        );
        assert_eq!(rewrite_args(argv(&["lsq", "--help"])), argv(&["lsq", "--help"]));
        assert_eq!(rewrite_args(argv(&["lsq", "fit"])), argv(&["lsq", "fit"]));
    }

    #[test]
    fn exported_curve_shows_the_same_lines() {
        let samples = crate::data::default_power_samples();
        let fit = crate::fit::fit_power(&samples.x, &samples.y, DEFAULT_X0).unwrap();

        let path =
            std::env::temp_dir().join(format!("lsq-curves-show-{}.json", std::process::id()));
        crate::io::curve::write_curve_json(&path, &samples, &[fit]).unwrap();
        let curve = crate::io::curve::read_curve_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(format_saved_fits(&curve, 3), format_fits(&[fit], 3));
    }

    #[test]
    fn missing_samples_is_an_input_error() {
        let err = run_config_from_args(&fit_args(&[], &[])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn query_point_defaults_to_demo_value() {
        let config = run_config_from_args(&fit_args(&[1.0, 2.0], &[1.0, 2.0])).unwrap();
        assert_eq!(config.x0, DEFAULT_X0);
        assert_eq!(config.samples.len(), 2);
    }

    #[test]
    fn flags_override_input_file() {
        let path =
            std::env::temp_dir().join(format!("lsq-curves-input-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"x": [1, 2, 3], "y": [4, 5, 6], "x0": 9}"#).unwrap();

        let mut args = fit_args(&[], &[7.0, 8.0, 9.0]);
        args.input = Some(path.clone());
        let config = run_config_from_args(&args).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(config.samples.x, vec![1.0, 2.0, 3.0]);
        assert_eq!(config.samples.y, vec![7.0, 8.0, 9.0]);
        assert_eq!(config.x0, 9.0);
    }
}
