// src/constants.rs

use plotters::style::colors::full_palette::{BLUE, DEEPORANGE, GREEN, ORANGE, PURPLE, RED, TEAL};
use plotters::style::RGBColor;

// Input defaults.
pub const DEFAULT_REPORT_PATH: &str = "report.csv";
pub const REPORT_COLUMN_COUNT: usize = 10;

// Column names in file order, as written by the simulator.
pub const REPORT_COLUMNS: [&str; REPORT_COLUMN_COUNT] = [
    "timestamp", "xpos", "ypos", "xvel", "yvel", "speed", "xacc", "yacc", "accmag", "freefall",
];

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1280;
pub const PLOT_HEIGHT: u32 = 960;

// Histogram bin count, fixed regardless of row count.
pub const HISTOGRAM_BINS: usize = 40;

// Acceleration magnitude above which a timestep counts as a spike.
pub const ACCEL_SPIKE_THRESHOLD: f64 = 1.8;

// --- Plot Color Assignments ---
pub const COLOR_ACCELERATION: &RGBColor = &RED;
pub const COLOR_POSITION: &RGBColor = &BLUE;
pub const COLOR_VELOCITY: &RGBColor = &TEAL;
pub const COLOR_HISTOGRAM: &RGBColor = &PURPLE;
pub const COLOR_SPEED: &RGBColor = &GREEN;
pub const COLOR_DIRECTION: &RGBColor = &ORANGE;
pub const COLOR_ACCEL_MAGNITUDE: &RGBColor = &DEEPORANGE;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Font sizes
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_LEGEND: i32 = 14;
pub const FONT_SIZE_MESSAGE: i32 = 28;

// src/constants.rs
