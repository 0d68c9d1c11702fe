//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - non-interactive runs (pipes, CI logs)
//! - deterministic output (helpful for tests)
//!
//! Plot elements:
//! - historical points: `o`, joined by `-`
//! - predicted points: `x`, joined by `.`
//! - value labels above points, then reasons at their trend-based anchors,
//!   each only where the cells are still blank
//! - every value and reason is also listed in tables below the grid

use std::fmt::Write as _;

use crate::plot::layout::{AnnotationKind, ChartSpec};

/// Render the chart as plain text.
pub fn render_ascii_chart(chart: &ChartSpec, width: usize, height: usize) -> String {
    let width = width.max(20);
    let height = height.max(5);
    let [x_min, x_max] = chart.x_bounds;
    let [y_min, y_max] = chart.y_bounds;

    let mut grid = vec![vec![' '; width]; height];

    // Lines first so markers and labels overlay them.
    draw_curve(&mut grid, &chart.historical, chart.x_bounds, chart.y_bounds, '-');
    draw_curve(&mut grid, &chart.predicted, chart.x_bounds, chart.y_bounds, '.');

    for &(x, y) in &chart.historical {
        grid[map_y(y, y_min, y_max, height)][map_x(x, x_min, x_max, width)] = 'o';
    }
    for &(x, y) in &chart.predicted {
        grid[map_y(y, y_min, y_max, height)][map_x(x, x_min, x_max, width)] = 'x';
    }

    // Values win over reasons when they compete for the same cells.
    let values = chart
        .annotations
        .iter()
        .filter(|a| a.kind != AnnotationKind::Reason);
    for a in values.chain(chart.annotations_of(AnnotationKind::Reason)) {
        let row = map_y(a.y, y_min, y_max, height);
        let col = map_x(a.x, x_min, x_max, width);
        place_label(&mut grid[row], col, &a.text);
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", chart.title);
    let _ = writeln!(
        out,
        "{}=[{x_min:.0}, {x_max:.0}] | {}=[{y_min:.1}, {y_max:.1}]",
        chart.x_label, chart.y_label
    );
    for row in grid {
        out.push_str(row.into_iter().collect::<String>().trim_end());
        out.push('\n');
    }
    out.push_str("o Historical Data   x Predicted\n\n");

    let actual = chart.annotations_of(AnnotationKind::Actual);
    let reasons = chart.annotations_of(AnnotationKind::Reason);
    let _ = writeln!(out, "{:>6}  {:>9}  Reason", chart.x_label, "Actual");
    for (value, reason) in actual.zip(reasons) {
        let _ = writeln!(out, "{:>6.0}  {:>9}  {}", value.x, value.text, reason.text);
    }
    out.push('\n');
    let _ = writeln!(out, "{:>6}  {:>9}", chart.x_label, "Predicted");
    for p in chart.annotations_of(AnnotationKind::Predicted) {
        let _ = writeln!(out, "{:>6.0}  {:>9}", p.x, p.text);
    }

    out
}

/// Write `text` centered on `col`, only if every cell it needs is blank.
fn place_label(row: &mut [char], col: usize, text: &str) {
    let len = text.chars().count();
    let start = col.saturating_sub(len / 2);
    if len == 0 || start + len > row.len() {
        return;
    }
    if row[start..start + len].iter().any(|&c| c != ' ') {
        return;
    }
    for (cell, ch) in row[start..start + len].iter_mut().zip(text.chars()) {
        *cell = ch;
    }
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], points: &[(f64, f64)], x_bounds: [f64; 2], y_bounds: [f64; 2], ch: char) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in points {
        let col = map_x(x, x_bounds[0], x_bounds[1], width);
        let row = map_y(y, y_bounds[0], y_bounds[1], height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, ch);
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Forecast, Series};
    use crate::plot::layout::build_chart;

    fn chart() -> ChartSpec {
        let series = Series {
            years: vec![2018, 2019, 2020],
            values: vec![40.0, 50.0, 45.0],
            reasons: vec!["launch".into(), "demand".into(), "dip".into()],
            y_label: "Total BCA Admissions".into(),
            title_fragment: "All Specializations".into(),
        };
        let forecast = Forecast {
            years: vec![2025, 2026, 2027, 2028, 2029],
            values: vec![55.5, 57.5, 59.5, 61.5, 63.5],
        };
        build_chart(&series, &forecast)
    }

    fn grid_lines(txt: &str, height: usize) -> Vec<&str> {
        txt.lines().skip(2).take(height).collect()
    }

    #[test]
    fn grid_has_one_marker_per_point() {
        let txt = render_ascii_chart(&chart(), 60, 20);
        let grid = grid_lines(&txt, 20);
        assert_eq!(grid.len(), 20);
        let count = |ch: char| grid.iter().map(|l| l.matches(ch).count()).sum::<usize>();
        assert_eq!(count('o'), 3);
        assert_eq!(count('x'), 5);
    }

    #[test]
    fn reasons_are_drawn_at_their_anchors() {
        let chart = chart();
        let txt = render_ascii_chart(&chart, 60, 20);
        let grid = grid_lines(&txt, 20);

        // First point trends up, so its reason sits below the point.
        let reason = chart.annotations_of(AnnotationKind::Reason).next().unwrap();
        let row = map_y(reason.y, chart.y_bounds[0], chart.y_bounds[1], 20);
        assert!(grid[row].contains("launch"), "row {row}: {:?}", grid[row]);

        let point_row = map_y(40.0, chart.y_bounds[0], chart.y_bounds[1], 20);
        assert!(row > point_row);
    }

    #[test]
    fn header_and_tables_carry_labels() {
        let txt = render_ascii_chart(&chart(), 60, 20);
        assert!(txt.starts_with("BCA Admissions & Forecast - All Specializations\n"));
        assert!(txt.contains("Year=[2017, 2030] | Total BCA Admissions=[30.0, 93.5]"));
        assert!(txt.contains("  2019         50  demand\n"));
        assert!(txt.contains("  2025         55\n"));
    }

    #[test]
    fn tiny_sizes_are_clamped() {
        let txt = render_ascii_chart(&chart(), 1, 1);
        let grid = grid_lines(&txt, 5);
        assert_eq!(grid.len(), 5);
        assert!(grid.iter().all(|l| l.chars().count() <= 20));
    }

    #[test]
    fn labels_never_overwrite_markers() {
        let mut row = vec![' ', 'o', ' ', ' '];
        place_label(&mut row, 1, "12");
        assert_eq!(row, vec![' ', 'o', ' ', ' ']);
        place_label(&mut row, 3, "7");
        assert_eq!(row, vec![' ', 'o', ' ', '7']);
    }
}
