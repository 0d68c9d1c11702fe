//! Straight-line regression of admissions against year.
//!
//! Given years `x_i` and admissions `y_i` we solve the affine OLS problem
//!
//! ```text
//! minimize Σ (y_i - (a + b·x_i))^2
//! ```
//!
//! Years are centered on their mean before solving. Raw years (≈2000) next to
//! a column of ones give a badly scaled design matrix; centering keeps both
//! columns on the same order of magnitude. The intercept is translated back
//! afterwards so [`LinearModel::predict`] takes raw years.

use log::debug;
use nalgebra::{DMatrix, DVector};

use crate::domain::{Forecast, LinearModel, Series, FORECAST_YEARS};
use crate::error::AppError;
use crate::math::{rank, solve_least_squares};

/// Fit `ys ≈ slope · xs + intercept`.
pub fn fit_line(xs: &[f64], ys: &[f64]) -> Result<LinearModel, AppError> {
    if xs.len() != ys.len() {
        return Err(AppError::fit(format!(
            "Cannot fit: {} years but {} values.",
            xs.len(),
            ys.len()
        )));
    }
    if xs.iter().chain(ys).any(|v| !v.is_finite()) {
        return Err(AppError::fit("Cannot fit: input contains non-finite values."));
    }
    if count_distinct(xs) < 2 {
        return Err(AppError::fit(
            "Cannot fit a trend line: need at least two distinct years of data.",
        ));
    }

    let n = xs.len();
    let x_mean = xs.iter().sum::<f64>() / n as f64;

    let mut design = DMatrix::<f64>::zeros(n, 2);
    for (row, &x) in xs.iter().enumerate() {
        design[(row, 0)] = 1.0;
        design[(row, 1)] = x - x_mean;
    }
    if rank(&design) < 2 {
        return Err(AppError::fit("Cannot fit: design matrix is rank deficient."));
    }

    let y = DVector::from_column_slice(ys);
    let beta = solve_least_squares(&design, &y)
        .ok_or_else(|| AppError::fit("Least squares solve failed."))?;

    let slope = beta[1];
    let intercept = beta[0] - slope * x_mean;
    if !(slope.is_finite() && intercept.is_finite()) {
        return Err(AppError::fit("Least squares solve produced non-finite coefficients."));
    }

    debug!("fitted line: slope={slope:.6} intercept={intercept:.6}");
    Ok(LinearModel { slope, intercept })
}

/// Fit the line for a whole series.
pub fn fit_series(series: &Series) -> Result<LinearModel, AppError> {
    let xs: Vec<f64> = series.years.iter().map(|&y| f64::from(y)).collect();
    fit_line(&xs, &series.values)
}

/// Predict admissions for the fixed forecast years.
pub fn forecast(model: &LinearModel) -> Forecast {
    let years = FORECAST_YEARS.to_vec();
    let values = years.iter().map(|&y| model.predict(f64::from(y))).collect();
    Forecast { years, values }
}

fn count_distinct(xs: &[f64]) -> usize {
    let mut sorted = xs.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted.dedup();
    sorted.len()
}
