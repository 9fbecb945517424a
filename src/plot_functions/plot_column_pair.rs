// src/plot_functions/plot_column_pair.rs

use plotters::style::RGBColor;

use crate::constants::{
    COLOR_ACCELERATION, COLOR_ACCEL_MAGNITUDE, COLOR_POSITION, COLOR_SPEED, COLOR_VELOCITY,
    LINE_WIDTH_PLOT,
};
use crate::data_input::report_data::{Column, ReportTable};
use crate::plot_framework::{padded_range, Figure, FigureBody, PlotSeries};
use crate::views::View;

fn series_color(view: View) -> RGBColor {
    match view {
        View::AccelerationScatter => *COLOR_ACCELERATION,
        View::PositionScatter => *COLOR_POSITION,
        View::VelocityScatter => *COLOR_VELOCITY,
        View::AccelerationMagnitudeOverTime => *COLOR_ACCEL_MAGNITUDE,
        _ => *COLOR_SPEED,
    }
}

/// Builds a line figure of one report column against another, in row order.
pub fn plot_column_pair(table: &ReportTable, view: View, x: Column, y: Column) -> Figure {
    let data = table.pairs(x, y);
    let x_range = padded_range(data.iter().map(|p| p.0)).unwrap_or(0.0..1.0);
    let y_range = padded_range(data.iter().map(|p| p.1)).unwrap_or(0.0..1.0);

    Figure {
        view,
        title: view.title().to_string(),
        x_label: x.label().to_string(),
        y_label: y.label().to_string(),
        x_range,
        y_range,
        body: FigureBody::Lines(vec![PlotSeries {
            data,
            label: y.label().to_string(),
            color: series_color(view),
            stroke_width: LINE_WIDTH_PLOT,
        }]),
    }
}

// src/plot_functions/plot_column_pair.rs
