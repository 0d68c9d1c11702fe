//! Trend fitting.
//!
//! Responsibilities:
//!
//! - fit an ordinary least squares line to (year, admissions)
//! - extrapolate it over the fixed forecast years

pub mod linear;

pub use linear::*;
