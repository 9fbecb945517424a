// src/plot_functions/plot_histogram.rs

use crate::constants::{COLOR_HISTOGRAM, HISTOGRAM_BINS};
use crate::data_analysis::histogram::compute_histogram;
use crate::data_input::report_data::{Column, ReportTable};
use crate::plot_framework::{Figure, FigureBody};
use crate::views::View;

/// Histogram of the y-position column with a fixed bin count.
pub fn plot_histogram(table: &ReportTable) -> Figure {
    let column = Column::YPos;
    let histogram = compute_histogram(&table.column(column), HISTOGRAM_BINS);
    let y_max = (histogram.max_count().max(1) as f64) * 1.1;

    Figure {
        view: View::SpeedHistogram,
        title: format!("{} ({} bins)", View::SpeedHistogram.title(), histogram.bin_count()),
        x_label: column.label().to_string(),
        y_label: "Count".to_string(),
        x_range: histogram.min..histogram.max,
        y_range: 0.0..y_max,
        body: FigureBody::Histogram {
            histogram,
            color: *COLOR_HISTOGRAM,
        },
    }
}

// src/plot_functions/plot_histogram.rs
