//! `admissions-forecast` library crate.
//!
//! The binary (`admit`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes or a terminal
//! - the pipeline stays separate from prompting and display

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod plot;
pub mod tui;
