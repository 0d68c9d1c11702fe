//! The forecast pipeline without any I/O.
//!
//! table + selection -> series -> fitted line -> forecast -> chart
//!
//! `app::run` handles the file, the prompt and the display around it.

use log::{debug, info};

use crate::domain::{AdmissionsTable, Forecast, LinearModel, Selection, Series, build_series};
use crate::error::AppError;
use crate::fit::{fit_series, forecast};
use crate::plot::layout::{ChartSpec, build_chart};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub series: Series,
    pub model: LinearModel,
    pub forecast: Forecast,
    pub chart: ChartSpec,
}

/// Execute the pipeline for one selection.
pub fn run_forecast(table: &AdmissionsTable, selection: &Selection) -> Result<RunOutput, AppError> {
    let series = build_series(table, selection)?;
    info!("forecasting '{}' over {} years", selection.display_name(), series.years.len());

    let model = fit_series(&series)?;
    let forecast = forecast(&model);
    debug!("forecast: {:?}", forecast.years.iter().zip(&forecast.values).collect::<Vec<_>>());

    let chart = build_chart(&series, &forecast);

    Ok(RunOutput {
        series,
        model,
        forecast,
        chart,
    })
}
