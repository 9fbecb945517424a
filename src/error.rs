// src/error.rs

use plotters::drawing::DrawingAreaErrorKind;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Everything that can go wrong between opening a report and presenting its figures.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: column '{column}' is not a number: '{value}'")]
    Parse {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("row {row}: x-velocity is zero, direction atan(yvel/xvel) is undefined")]
    ZeroDivision { row: usize },

    #[error("view 'direction-over-time' is enabled but no directions were derived")]
    MissingDirections,

    #[error("direction column has {found} values but the report has {expected} rows")]
    DirectionLength { expected: usize, found: usize },

    #[error("unknown view '{0}'")]
    UnknownView(String),

    #[error("invalid view configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("plotting failed: {0}")]
    Plot(String),
}

// Backend error types differ per plotters backend, so keep only the message.
impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ReportError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ReportError::Plot(err.to_string())
    }
}
