//! Command-line parsing for the admissions forecaster.
//!
//! The input file and the forecast horizon are fixed; flags only control how
//! the chart is shown and how chatty the logger is.

use clap::Parser;

pub mod picker;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "admit",
    version,
    about = "Forecast BCA admissions per specialization with a linear trend"
)]
pub struct Cli {
    /// Print a text chart to stdout instead of opening the interactive view.
    #[arg(long)]
    pub ascii: bool,

    /// Text chart width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Text chart height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter implied by `-v` flags (`RUST_LOG` still wins when set).
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
