// src/data_input/report_parser.rs

use csv::ReaderBuilder;
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::constants::{REPORT_COLUMNS, REPORT_COLUMN_COUNT};
use crate::data_input::report_data::{ReportRow, ReportTable};
use crate::error::{ReportError, Result};

/// Loads a report file: one header line, then rows of ten comma-separated numbers.
///
/// The header text is not inspected. Any data row with the wrong column count or a
/// non-numeric field aborts the load; nothing is skipped.
pub fn load(input_file_path: &Path) -> Result<ReportTable> {
    let file = File::open(input_file_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ReportError::FileNotFound {
            path: input_file_path.to_path_buf(),
        },
        _ => ReportError::Io(e),
    })?;

    let table = parse_report(BufReader::new(file))?;
    info!(
        "Loaded {} data rows from '{}'",
        table.len(),
        input_file_path.display()
    );
    Ok(table)
}

/// Parses report content from any reader. `load` is this plus opening the file.
pub fn parse_report<R: Read>(source: R) -> Result<ReportTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    // Byte records: the header is never decoded, so any bytes are accepted there.
    let header_record = reader.byte_headers()?.clone();
    debug!(
        "Header line: {:?}",
        String::from_utf8_lossy(header_record.as_slice())
    );

    let mut rows: Vec<ReportRow> = Vec::new();
    for result in reader.byte_records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() != REPORT_COLUMN_COUNT {
            return Err(ReportError::ColumnCount {
                line,
                expected: REPORT_COLUMN_COUNT,
                found: record.len(),
            });
        }

        let mut values = [0.0f64; REPORT_COLUMN_COUNT];
        for (idx, field) in record.iter().enumerate() {
            values[idx] = std::str::from_utf8(field)
                .ok()
                .and_then(|s| s.parse::<f64>().ok())
                .ok_or_else(|| ReportError::Parse {
                    line,
                    column: REPORT_COLUMNS[idx],
                    value: String::from_utf8_lossy(field).into_owned(),
                })?;
        }
        rows.push(ReportRow::from_fields(values));
    }

    Ok(ReportTable::new(rows))
}
