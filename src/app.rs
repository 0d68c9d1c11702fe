//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - loads the admissions table
//! - asks which specialization to forecast
//! - runs the fit/forecast pipeline
//! - shows the chart

use std::io;
use std::path::Path;

use clap::Parser;
use log::info;

use crate::cli::Cli;
use crate::cli::picker::{menu_options, prompt_for_selection};
use crate::error::AppError;

pub mod pipeline;

/// Dataset read on every run, relative to the working directory.
pub const DATA_FILE: &str = "bca_admissions.csv";

/// Entry point for the `admit` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(&cli);

    let table = crate::io::load_admissions(Path::new(DATA_FILE))?;

    let options = menu_options(&table);
    let stdin = io::stdin();
    let selection = prompt_for_selection(&options, stdin.lock(), io::stdout())?;
    info!("selected: {}", selection.display_name());

    let run = pipeline::run_forecast(&table, &selection)?;

    if cli.ascii {
        print!(
            "{}",
            crate::plot::render_ascii_chart(&run.chart, cli.width, cli.height)
        );
        return Ok(());
    }

    crate::tui::show(&run.chart)
}

fn init_logging(cli: &Cli) {
    // `RUST_LOG`, when set, takes precedence over `-v`.
    let _ = env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
