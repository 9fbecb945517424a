// src/plot_functions/plot_direction.rs

use crate::constants::{COLOR_DIRECTION, LINE_WIDTH_PLOT};
use crate::data_input::report_data::{Column, ReportTable};
use crate::plot_framework::{padded_range, Figure, FigureBody, PlotSeries};
use crate::views::View;

/// Direction (radians) against timestep. `directions` is parallel to the table rows.
pub fn plot_direction(table: &ReportTable, directions: &[f64]) -> Figure {
    let data: Vec<(f64, f64)> = table
        .rows()
        .iter()
        .zip(directions.iter())
        .map(|(row, &dir)| (row.timestep, dir))
        .collect();
    let x_range = padded_range(data.iter().map(|p| p.0)).unwrap_or(0.0..1.0);
    let y_range = padded_range(data.iter().map(|p| p.1)).unwrap_or(0.0..1.0);

    Figure {
        view: View::DirectionOverTime,
        title: View::DirectionOverTime.title().to_string(),
        x_label: Column::Timestep.label().to_string(),
        y_label: "Direction (rad)".to_string(),
        x_range,
        y_range,
        body: FigureBody::Lines(vec![PlotSeries {
            data,
            label: "atan(yvel / xvel)".to_string(),
            color: *COLOR_DIRECTION,
            stroke_width: LINE_WIDTH_PLOT,
        }]),
    }
}

// src/plot_functions/plot_direction.rs
