// src/plot_functions/mod.rs

pub mod plot_column_pair;
pub mod plot_direction;
pub mod plot_histogram;

use log::{debug, info};

use crate::data_input::report_data::ReportTable;
use crate::error::{ReportError, Result};
use crate::plot_framework::{Figure, RenderSink};
use crate::views::{View, ViewSelection};

/// Builds the figure for one view.
pub fn build_figure(table: &ReportTable, directions: Option<&[f64]>, view: View) -> Result<Figure> {
    match (view, view.columns()) {
        (View::SpeedHistogram, _) => Ok(plot_histogram::plot_histogram(table)),
        (View::DirectionOverTime, _) => {
            let directions = directions.ok_or(ReportError::MissingDirections)?;
            if directions.len() != table.len() {
                return Err(ReportError::DirectionLength {
                    expected: table.len(),
                    found: directions.len(),
                });
            }
            Ok(plot_direction::plot_direction(table, directions))
        }
        (_, Some((x, y))) => Ok(plot_column_pair::plot_column_pair(table, view, x, y)),
        (_, None) => Err(ReportError::UnknownView(view.to_string())),
    }
}

/// Builds every enabled view and hands them to `sink` in one batch.
///
/// Returns the number of figures presented. All figures are built before the sink is called,
/// so a failing view leaves nothing half-written.
pub fn render(
    table: &ReportTable,
    directions: Option<&[f64]>,
    selection: &ViewSelection,
    sink: &mut dyn RenderSink,
) -> Result<usize> {
    let views = selection.enabled_views();
    info!("Rendering {} view(s)", views.len());

    let figures = views
        .iter()
        .map(|&view| {
            debug!("  building '{}'", view);
            build_figure(table, directions, view)
        })
        .collect::<Result<Vec<Figure>>>()?;

    sink.present(&figures)?;
    Ok(figures.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HISTOGRAM_BINS;
    use crate::data_input::report_data::ReportRow;
    use crate::plot_framework::{FigureBody, RecordingSink};

    fn table() -> ReportTable {
        ReportTable::new(
            (0..5)
                .map(|i| {
                    let t = i as f64;
                    ReportRow::from_fields([t, t, -t, 1.0, 0.5, 1.1, 0.1, -0.2, 0.22, 0.0])
                })
                .collect(),
        )
    }

    #[test]
    fn test_default_selection_renders_four_figures() {
        let mut sink = RecordingSink::default();
        let n = render(&table(), None, &ViewSelection::default(), &mut sink).unwrap();
        assert_eq!(n, 4);
        assert_eq!(sink.presentations, 1);
        let views: Vec<View> = sink.figures.iter().map(|f| f.view).collect();
        assert_eq!(
            views,
            vec![
                View::AccelerationScatter,
                View::PositionScatter,
                View::SpeedHistogram,
                View::SpeedOverTime
            ]
        );
    }

    #[test]
    fn test_direction_view_requires_directions() {
        let mut selection = ViewSelection::none();
        selection.set(View::DirectionOverTime, true);
        let mut sink = RecordingSink::default();
        assert!(matches!(
            render(&table(), None, &selection, &mut sink),
            Err(ReportError::MissingDirections)
        ));
        assert_eq!(sink.presentations, 0);
    }

    #[test]
    fn test_direction_length_must_match_rows() {
        let mut selection = ViewSelection::none();
        selection.set(View::DirectionOverTime, true);
        let short = vec![0.1, 0.2];
        let mut sink = RecordingSink::default();
        assert!(matches!(
            render(&table(), Some(short.as_slice()), &selection, &mut sink),
            Err(ReportError::DirectionLength { expected: 5, found: 2 })
        ));
        assert_eq!(sink.presentations, 0);
    }

    #[test]
    fn test_histogram_bins() {
        let fig = build_figure(&table(), None, View::SpeedHistogram).unwrap();
        match fig.body {
            FigureBody::Histogram { histogram, .. } => {
                assert_eq!(histogram.bin_count(), HISTOGRAM_BINS);
                assert_eq!(histogram.counts.iter().sum::<usize>(), 5);
            }
            _ => panic!("expected a histogram"),
        }
    }

    #[test]
    fn test_position_scatter_uses_position_columns() {
        let fig = build_figure(&table(), None, View::PositionScatter).unwrap();
        match fig.body {
            FigureBody::Lines(series) => {
                assert_eq!(series[0].data[2], (2.0, -2.0));
            }
            _ => panic!("expected lines"),
        }
        assert!(fig.x_range.start < 0.0 && fig.x_range.end > 4.0);
    }

    #[test]
    fn test_nothing_enabled() {
        let mut sink = RecordingSink::default();
        let n = render(&table(), None, &ViewSelection::none(), &mut sink).unwrap();
        assert_eq!(n, 0);
        assert!(sink.figures.is_empty());
    }
}

// src/plot_functions/mod.rs
