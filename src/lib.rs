// src/lib.rs - Library interface for the report plotter

pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod plot_framework;
pub mod plot_functions;
pub mod views;

pub use data_analysis::direction::{derive_direction, DirectionMode};
pub use data_input::report_parser::load;
pub use error::{ReportError, Result};
pub use plot_functions::render;

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
