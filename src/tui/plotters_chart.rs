//! Plotters-powered forecast chart widget for Ratatui.
//!
//! Plotters gives us axes, mesh, dashed lines and data-anchored text, which
//! Ratatui's built-in `Chart` widget does not. Output lands in the Ratatui
//! buffer via `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::plot::layout::{AnnotationKind, ChartSpec};

pub const HISTORICAL_COLOR: RGBColor = RGBColor(80, 140, 255);
pub const PREDICTED_COLOR: RGBColor = RGBColor(255, 70, 70);
pub const REASON_COLOR: RGBColor = RGBColor(0, 170, 0);

/// Minimum area Plotters needs to lay out axes and labels.
pub const MIN_WIDTH: u16 = 20;
pub const MIN_HEIGHT: u16 = 8;

/// Render-only view of a [`ChartSpec`].
///
/// All geometry is computed beforehand; `render()` only draws.
pub struct ForecastPlottersChart<'a> {
    pub chart: &'a ChartSpec,
}

impl<'a> Widget for ForecastPlottersChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a chart.
        // In that case, we render a small hint rather than panicking.
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let [x0, x1] = self.chart.x_bounds;
        let [y0, y1] = self.chart.y_bounds;
        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        let chart = self.chart;
        let widget = widget_fn(move |root| {
            let mut ctx = ChartBuilder::on(&root)
                .margin(1)
                .set_label_area_size(LabelAreaPosition::Left, 6)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            ctx.configure_mesh()
                .x_desc(chart.x_label.as_str())
                .y_desc(chart.y_label.as_str())
                .x_labels(8)
                .y_labels(5)
                .x_label_formatter(&|v| format!("{v:.0}"))
                .y_label_formatter(&|v| format!("{v:.0}"))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&RGBColor(60, 60, 60))
                .light_line_style(&TRANSPARENT)
                .draw()?;

            ctx.draw_series(LineSeries::new(chart.historical.iter().copied(), HISTORICAL_COLOR))?;
            ctx.draw_series(DashedLineSeries::new(
                chart.predicted.iter().copied(),
                4,
                3,
                PREDICTED_COLOR.into(),
            ))?;

            // Markers as centered glyphs: the backend maps `Circle` radii in
            // pixels onto normalized canvas units and draws them oversized.
            let marker = |color: RGBColor| {
                ("sans-serif", 10)
                    .into_font()
                    .color(&color)
                    .pos(Pos::new(HPos::Center, VPos::Center))
            };
            ctx.draw_series(
                chart
                    .historical
                    .iter()
                    .map(|&p| Text::new("o", p, marker(HISTORICAL_COLOR))),
            )?;
            ctx.draw_series(
                chart
                    .predicted
                    .iter()
                    .map(|&p| Text::new("x", p, marker(PREDICTED_COLOR))),
            )?;

            ctx.draw_series(chart.annotations.iter().map(|a| {
                let color = match a.kind {
                    AnnotationKind::Actual => HISTORICAL_COLOR,
                    AnnotationKind::Reason => REASON_COLOR,
                    AnnotationKind::Predicted => PREDICTED_COLOR,
                };
                Text::new(a.text.clone(), (a.x, a.y), marker(color))
            }))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}
