//! Input helpers.
//!
//! - CSV ingest of the admissions table (`ingest`)

pub mod ingest;

pub use ingest::*;
