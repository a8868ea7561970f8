//! `lsq-curves` library crate.
//!
//! Least-squares fitting of logarithmic (`a·ln(x) + b`) and power (`a·x^b`)
//! curves. The binary (`lsq`) is a thin wrapper around this library so that:
//!
//! - the fitting core is testable without spawning processes
//! - the core stays pure: no I/O, no logging, no global state

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod report;
