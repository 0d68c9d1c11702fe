//! Turning a [`Selection`] into the series the regression runs on.

use crate::domain::{AdmissionsTable, Selection, Series};
use crate::error::AppError;

/// Build the target series for `selection`.
///
/// - `All` sums every specialization row by row.
/// - a named specialization is copied unchanged.
///
/// Row order always follows the table.
pub fn build_series(table: &AdmissionsTable, selection: &Selection) -> Result<Series, AppError> {
    let (values, y_label, title_fragment) = match selection {
        Selection::All => {
            let mut totals = vec![0u64; table.row_count()];
            for spec in &table.specializations {
                for ((total, count), year) in totals.iter_mut().zip(&spec.counts).zip(&table.years) {
                    *total = total.checked_add(*count).ok_or_else(|| {
                        AppError::input(format!("Year {year}: total admissions overflow"))
                    })?;
                }
            }
            (
                totals.into_iter().map(|v| v as f64).collect(),
                "Total BCA Admissions".to_string(),
                "All Specializations".to_string(),
            )
        }
        Selection::Specialization(name) => {
            let spec = table
                .specialization(name)
                .ok_or_else(|| AppError::input(format!("Unknown specialization: {name}")))?;
            (
                spec.counts.iter().map(|&v| v as f64).collect(),
                format!("{name} Admissions"),
                name.clone(),
            )
        }
    };

    Ok(Series {
        years: table.years.clone(),
        values,
        reasons: table.reasons.clone(),
        y_label,
        title_fragment,
    })
}
