//! Reporting utilities: formatted fit lines and run timings.

pub mod format;

pub use format::*;
