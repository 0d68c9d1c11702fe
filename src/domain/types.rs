//! Shared domain types.
//!
//! Everything here lives for a single run: the table is loaded once, a
//! selection is made once, and the derived series/model/forecast are consumed
//! by the renderer.

/// Column holding the (integer) year of each row.
pub const YEAR_COLUMN: &str = "Year";

/// Column holding the free-text explanation for each year's change.
pub const REASON_COLUMN: &str = "Impact_Reason";

/// Menu label of the synthetic "sum of everything" option.
pub const ALL_LABEL: &str = "All (Total BCA Admissions)";

/// Years the fitted line is extrapolated to, independent of the input range.
pub const FORECAST_YEARS: [i32; 5] = [2025, 2026, 2027, 2028, 2029];

/// One named admissions column.
#[derive(Debug, Clone, PartialEq)]
pub struct Specialization {
    pub name: String,
    /// One count per table row, in file order.
    pub counts: Vec<u64>,
}

/// The admissions dataset as read from disk.
///
/// Invariant: `years`, `reasons` and every `Specialization::counts` have the
/// same length (one entry per row).
#[derive(Debug, Clone, PartialEq)]
pub struct AdmissionsTable {
    pub years: Vec<i32>,
    pub reasons: Vec<String>,
    pub specializations: Vec<Specialization>,
}

impl AdmissionsTable {
    pub fn row_count(&self) -> usize {
        self.years.len()
    }

    /// Specialization names in header order (reserved columns excluded).
    pub fn specialization_names(&self) -> Vec<&str> {
        self.specializations.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn specialization(&self, name: &str) -> Option<&Specialization> {
        self.specializations.iter().find(|s| s.name == name)
    }
}

/// What the user asked to forecast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Row-wise sum across every specialization.
    All,
    /// A single specialization column, by name.
    Specialization(String),
}

impl Selection {
    /// Name shown in the menu and in log lines.
    pub fn display_name(&self) -> &str {
        match self {
            Selection::All => ALL_LABEL,
            Selection::Specialization(name) => name,
        }
    }
}

/// The response variable chosen for the regression, with its labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub years: Vec<i32>,
    pub values: Vec<f64>,
    pub reasons: Vec<String>,
    pub y_label: String,
    pub title_fragment: String,
}

/// Fitted straight line `admissions = slope * year + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearModel {
    pub fn predict(&self, year: f64) -> f64 {
        self.slope * year + self.intercept
    }
}

/// Predicted admissions for [`FORECAST_YEARS`].
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub years: Vec<i32>,
    pub values: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_model_predicts_on_the_line() {
        let model = LinearModel {
            slope: 2.0,
            intercept: -4000.0,
        };
        assert_eq!(model.predict(2025.0), 50.0);
    }

    #[test]
    fn selection_display_names() {
        assert_eq!(Selection::All.display_name(), ALL_LABEL);
        assert_eq!(
            Selection::Specialization("Data Science".to_string()).display_name(),
            "Data Science"
        );
    }

    #[test]
    fn table_lookup_by_name() {
        let table = AdmissionsTable {
            years: vec![2020],
            reasons: vec!["x".to_string()],
            specializations: vec![Specialization {
                name: "AI".to_string(),
                counts: vec![4],
            }],
        };
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.specialization_names(), vec!["AI"]);
        assert!(table.specialization("AI").is_some());
        assert!(table.specialization("Cloud").is_none());
    }
}
