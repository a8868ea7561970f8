//! Input/output helpers.
//!
//! - sample JSON ingest (`ingest`)
//! - curve JSON read/write (`curve`)

pub mod curve;
pub mod ingest;

pub use curve::*;
pub use ingest::*;
