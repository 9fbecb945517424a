// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend, SVGBackend};
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Rectangle, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use log::{info, warn};
use std::fs;
use std::io::BufRead;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE,
    FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND, PLOT_HEIGHT, PLOT_WIDTH,
};
use crate::data_analysis::histogram::Histogram;
use crate::error::Result;
use crate::views::View;

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Padded range over the finite values of an iterator, or `None` if there are none.
pub fn padded_range<I: IntoIterator<Item = f64>>(values: I) -> Option<Range<f64>> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values.into_iter().filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo > hi {
        return None;
    }
    let (lo, hi) = calculate_range(lo, hi);
    Some(lo..hi)
}

/// Axis tick label: k/M notation for large magnitudes, two decimals for small fractional values.
pub fn format_axis_value(v: f64) -> String {
    if v.abs() >= 1_000_000.0 {
        format!("{:.1}M", v / 1_000_000.0)
    } else if v.abs() >= 1000.0 {
        format!("{:.0}k", v / 1000.0)
    } else if v.abs() < 10.0 && v.fract() != 0.0 {
        format!("{:.2}", v)
    } else {
        format!("{:.0}", v)
    }
}

#[derive(Debug, Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

#[derive(Debug, Clone)]
pub enum FigureBody {
    /// One or more connected line series.
    Lines(Vec<PlotSeries>),
    /// Bars over equal-width bins.
    Histogram { histogram: Histogram, color: RGBColor },
}

/// Everything needed to draw one view, independent of the backend.
#[derive(Debug, Clone)]
pub struct Figure {
    pub view: View,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub body: FigureBody,
}

impl Figure {
    pub fn has_data(&self) -> bool {
        match &self.body {
            FigureBody::Lines(series) => series.iter().any(|s| !s.data.is_empty()),
            FigureBody::Histogram { histogram, .. } => histogram.max_count() > 0,
        }
    }

    fn valid_ranges(&self) -> bool {
        self.x_range.end > self.x_range.start && self.y_range.end > self.y_range.start
    }
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    reason: &str,
) -> Result<()> {
    let message = format!("{} Data Unavailable:\n{}", title, reason);
    let (width, height) = area.dim_in_pixel();
    let estimated_text_width = (message.len() as i32 * FONT_SIZE_MESSAGE) / 3;
    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let center_y = height as i32 / 2 - FONT_SIZE_MESSAGE / 2;

    let text_style = ("sans-serif", FONT_SIZE_MESSAGE).into_font().color(&RED);
    area.draw(&Text::new(message, (center_x.max(5), center_y), text_style))?;
    Ok(())
}

/// Draws a single chart for a figure onto `area`.
fn draw_figure_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    figure: &Figure,
) -> Result<()> {
    let mut chart = ChartBuilder::on(area)
        .caption(&figure.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(figure.x_range.clone(), figure.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&figure.x_label)
        .y_desc(&figure.y_label)
        .x_labels(20)
        .y_labels(10)
        .x_label_formatter(&|x| format_axis_value(*x))
        .y_label_formatter(&|y| format_axis_value(*y))
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    match &figure.body {
        FigureBody::Lines(series) => {
            let mut legend_series_count = 0;
            for s in series.iter().filter(|s| !s.data.is_empty()) {
                let drawn = chart.draw_series(LineSeries::new(
                    s.data.iter().cloned(),
                    s.color.stroke_width(s.stroke_width),
                ))?;
                if !s.label.is_empty() {
                    let color = s.color;
                    drawn.label(&s.label).legend(move |(x, y)| {
                        PathElement::new(
                            vec![(x, y), (x + 20, y)],
                            color.stroke_width(LINE_WIDTH_LEGEND),
                        )
                    });
                    legend_series_count += 1;
                }
            }
            if legend_series_count > 0 {
                chart
                    .configure_series_labels()
                    .position(SeriesLabelPosition::UpperRight)
                    .background_style(WHITE.mix(0.8))
                    .border_style(BLACK)
                    .label_font(("sans-serif", FONT_SIZE_LEGEND))
                    .draw()?;
            }
        }
        FigureBody::Histogram { histogram, color } => {
            let fill = color.mix(0.6).filled();
            let outline = color.stroke_width(1);
            chart.draw_series(histogram.counts.iter().enumerate().map(|(i, &count)| {
                let (lo, hi) = histogram.bin_edges(i);
                Rectangle::new([(lo, 0.0), (hi, count as f64)], fill)
            }))?;
            chart.draw_series(histogram.counts.iter().enumerate().map(|(i, &count)| {
                let (lo, hi) = histogram.bin_edges(i);
                Rectangle::new([(lo, 0.0), (hi, count as f64)], outline)
            }))?;
        }
    }
    Ok(())
}

/// Draws one full page: report name at the top, then the chart or an unavailable message.
pub fn draw_figure_page<DB: DrawingBackend>(
    root_area: &DrawingArea<DB, Shift>,
    root_name: &str,
    figure: &Figure,
) -> Result<bool> {
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name.to_string(),
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;
    let area = root_area.margin(50, 5, 5, 5);

    let plotted = if !figure.has_data() {
        draw_unavailable_message(&area, &figure.title, "No data points")?;
        false
    } else if !figure.valid_ranges() {
        draw_unavailable_message(&area, &figure.title, "Invalid ranges")?;
        false
    } else {
        draw_figure_chart(&area, figure)?;
        true
    };
    root_area.present()?;
    Ok(plotted)
}

/// Destination for a batch of rendered figures.
pub trait RenderSink {
    fn present(&mut self, figures: &[Figure]) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// Writes each figure to `<output_dir>/<root_name>_<view>.<ext>`.
#[derive(Debug, Clone)]
pub struct FileSink {
    pub output_dir: PathBuf,
    pub root_name: String,
    pub format: ImageFormat,
    written: Vec<PathBuf>,
}

impl FileSink {
    pub fn new(output_dir: &Path, root_name: &str, format: ImageFormat) -> Self {
        FileSink {
            output_dir: output_dir.to_path_buf(),
            root_name: root_name.to_string(),
            format,
            written: Vec::new(),
        }
    }

    pub fn output_path(&self, view: View) -> PathBuf {
        self.output_dir.join(format!(
            "{}_{}.{}",
            self.root_name,
            view.name(),
            self.format.extension()
        ))
    }

    /// Files written so far, in presentation order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl RenderSink for FileSink {
    fn present(&mut self, figures: &[Figure]) -> Result<()> {
        if !figures.is_empty() {
            fs::create_dir_all(&self.output_dir)?;
        }
        for figure in figures {
            let path = self.output_path(figure.view);
            let plotted = match self.format {
                ImageFormat::Png => {
                    let root = BitMapBackend::new(&path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
                    draw_figure_page(&root, &self.root_name, figure)?
                }
                ImageFormat::Svg => {
                    let root = SVGBackend::new(&path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
                    draw_figure_page(&root, &self.root_name, figure)?
                }
            };
            if plotted {
                info!("  Plot saved as '{}'.", path.display());
            } else {
                warn!("  '{}' saved with a placeholder: no data to plot.", path.display());
            }
            self.written.push(path);
        }
        Ok(())
    }
}

/// Presents through an inner sink, then blocks until a line (or EOF) arrives on `input`.
pub struct BlockingSink<S, R> {
    inner: S,
    input: R,
}

impl<S: RenderSink, R: BufRead> BlockingSink<S, R> {
    pub fn new(inner: S, input: R) -> Self {
        BlockingSink { inner, input }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: RenderSink, R: BufRead> RenderSink for BlockingSink<S, R> {
    fn present(&mut self, figures: &[Figure]) -> Result<()> {
        self.inner.present(figures)?;
        info!("{} figure(s) ready. Press Enter to dismiss.", figures.len());
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }
}

/// Keeps presented figures in memory. Nothing is drawn.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub figures: Vec<Figure>,
    pub presentations: usize,
}

impl RenderSink for RecordingSink {
    fn present(&mut self, figures: &[Figure]) -> Result<()> {
        self.figures.extend_from_slice(figures);
        self.presentations += 1;
        Ok(())
    }
}
