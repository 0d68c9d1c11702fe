//! Chart construction and text rendering.
//!
//! - `layout`: resolves points, annotations and bounds into a `ChartSpec`
//! - `ascii`: draws a `ChartSpec` as plain text

pub mod ascii;
pub mod layout;

pub use ascii::*;
pub use layout::*;
