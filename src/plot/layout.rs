//! Backend-independent chart description.
//!
//! All geometry is resolved here so the Ratatui/Plotters view and the text
//! renderer only have to draw what they are handed:
//!
//! - historical and forecast point lists (real-valued, untruncated)
//! - every annotation with its anchor in data coordinates
//! - axis bounds, title and labels
//!
//! Labels show values truncated toward zero; the plotted curves do not.

use crate::domain::{Forecast, Series};

/// Vertical offset of an actual-value label above its point.
pub const ACTUAL_LABEL_OFFSET: f64 = 3.0;
/// Vertical offset of a reason label from its point (sign depends on trend).
pub const REASON_LABEL_OFFSET: f64 = 8.0;
/// Vertical offset of a predicted-value label above its point.
pub const PREDICTED_LABEL_OFFSET: f64 = 2.0;

/// Padding around the year range, in years.
pub const X_PADDING: f64 = 1.0;
/// Space below the smallest value.
pub const Y_PADDING_BELOW: f64 = 10.0;
/// Space above the largest value; leaves room for the labels.
pub const Y_PADDING_ABOVE: f64 = 30.0;

/// What a text annotation describes (drives its color).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    Actual,
    Reason,
    Predicted,
}

/// Where a reason label sits relative to its point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Above,
    Below,
}

/// A piece of text anchored (centered) at a data coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub kind: AnnotationKind,
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Everything needed to draw the forecast chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub historical: Vec<(f64, f64)>,
    pub predicted: Vec<(f64, f64)>,
    pub annotations: Vec<Annotation>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl ChartSpec {
    pub fn annotations_of(&self, kind: AnnotationKind) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter().filter(move |a| a.kind == kind)
    }
}

/// Integer shown in a value label (truncated toward zero).
pub fn display_value(v: f64) -> i64 {
    v.trunc() as i64
}

/// Reason placement for every historical point.
///
/// A point "trends up" when its displayed value is at least the previous
/// one; the first point always does. Trending up puts the reason below the
/// point (the value label is above), otherwise above.
pub fn reason_placements(values: &[f64]) -> Vec<Placement> {
    let shown: Vec<i64> = values.iter().map(|&v| display_value(v)).collect();
    shown
        .iter()
        .enumerate()
        .map(|(i, &cur)| {
            let trend_up = i == 0 || cur >= shown[i - 1];
            if trend_up {
                Placement::Below
            } else {
                Placement::Above
            }
        })
        .collect()
}

/// Build the chart for a historical series and its forecast.
pub fn build_chart(series: &Series, forecast: &Forecast) -> ChartSpec {
    let historical: Vec<(f64, f64)> = series
        .years
        .iter()
        .zip(&series.values)
        .map(|(&year, &v)| (f64::from(year), v))
        .collect();
    let predicted: Vec<(f64, f64)> = forecast
        .years
        .iter()
        .zip(&forecast.values)
        .map(|(&year, &v)| (f64::from(year), v))
        .collect();

    let mut annotations = Vec::with_capacity(historical.len() * 2 + predicted.len());
    let placements = reason_placements(&series.values);

    for (((x, v), reason), placement) in historical.iter().zip(&series.reasons).zip(placements) {
        let shown = display_value(*v) as f64;
        annotations.push(Annotation {
            kind: AnnotationKind::Actual,
            text: display_value(*v).to_string(),
            x: *x,
            y: shown + ACTUAL_LABEL_OFFSET,
        });
        let reason_y = match placement {
            Placement::Below => shown - REASON_LABEL_OFFSET,
            Placement::Above => shown + REASON_LABEL_OFFSET,
        };
        annotations.push(Annotation {
            kind: AnnotationKind::Reason,
            text: reason.clone(),
            x: *x,
            y: reason_y,
        });
    }

    for (x, v) in &predicted {
        let shown = display_value(*v);
        annotations.push(Annotation {
            kind: AnnotationKind::Predicted,
            text: shown.to_string(),
            x: *x,
            y: shown as f64 + PREDICTED_LABEL_OFFSET,
        });
    }

    let (x_bounds, y_bounds) = chart_bounds(&historical, &predicted);

    ChartSpec {
        title: format!("BCA Admissions & Forecast - {}", series.title_fragment),
        x_label: "Year".to_string(),
        y_label: series.y_label.clone(),
        historical,
        predicted,
        annotations,
        x_bounds,
        y_bounds,
    }
}

/// Tight bounds over historical and forecast points, padded per the constants above.
fn chart_bounds(historical: &[(f64, f64)], predicted: &[(f64, f64)]) -> ([f64; 2], [f64; 2]) {
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(x, y) in historical.iter().chain(predicted) {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if !(x_min.is_finite() && x_max.is_finite()) {
        x_min = 0.0;
        x_max = 1.0;
    }
    if !(y_min.is_finite() && y_max.is_finite()) {
        y_min = 0.0;
        y_max = 1.0;
    }

    (
        [x_min - X_PADDING, x_max + X_PADDING],
        [y_min - Y_PADDING_BELOW, y_max + Y_PADDING_ABOVE],
    )
}
