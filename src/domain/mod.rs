//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the loaded dataset (`AdmissionsTable`, `Specialization`)
//! - the user's choice (`Selection`) and the series derived from it (`Series`)
//! - fit outputs (`LinearModel`, `Forecast`)

pub mod series;
pub mod types;

pub use series::*;
pub use types::*;
