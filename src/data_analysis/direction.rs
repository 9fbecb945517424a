// src/data_analysis/direction.rs

use std::f64::consts::FRAC_PI_2;

use crate::data_input::report_data::ReportTable;
use crate::error::{ReportError, Result};

/// How rows with a zero x-velocity are handled when deriving direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DirectionMode {
    /// `atan(yvel / xvel)` with no guard: a zero x-velocity is an error.
    #[default]
    Strict,
    /// A zero x-velocity maps to +/- pi/2 by the sign of y-velocity, or 0 when both are zero.
    Guarded,
}

/// Derives the heading of every row as `atan(yvel / xvel)`.
///
/// In `Strict` mode the first row with `xvel == 0` fails with `ZeroDivision`.
pub fn derive_direction(table: &ReportTable, mode: DirectionMode) -> Result<Vec<f64>> {
    let mut directions = Vec::with_capacity(table.len());

    for (row_index, row) in table.rows().iter().enumerate() {
        if row.xvel == 0.0 {
            match mode {
                DirectionMode::Strict => {
                    return Err(ReportError::ZeroDivision { row: row_index });
                }
                DirectionMode::Guarded => {
                    let dir = if row.yvel > 0.0 {
                        FRAC_PI_2
                    } else if row.yvel < 0.0 {
                        -FRAC_PI_2
                    } else {
                        0.0
                    };
                    directions.push(dir);
                    continue;
                }
            }
        }
        directions.push((row.yvel / row.xvel).atan());
    }

    Ok(directions)
}
