// src/data_input/report_data.rs

use ndarray::Array1;

use crate::constants::REPORT_COLUMN_COUNT;

/// One timestep of a simulator report, fields in file column order.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ReportRow {
    pub timestep: f64,
    pub xpos: f64,
    pub ypos: f64, // Already flipped to "up is positive" by the simulator.
    pub xvel: f64,
    pub yvel: f64,
    pub speed: f64,
    pub xacc: f64,
    pub yacc: f64,
    pub accmag: f64,
    pub freefall: f64, // 0 or 1, not interpreted by the plots.
}

impl ReportRow {
    /// Builds a row from the ten values of a data line, in column order.
    pub fn from_fields(v: [f64; REPORT_COLUMN_COUNT]) -> Self {
        ReportRow {
            timestep: v[0],
            xpos: v[1],
            ypos: v[2],
            xvel: v[3],
            yvel: v[4],
            speed: v[5],
            xacc: v[6],
            yacc: v[7],
            accmag: v[8],
            freefall: v[9],
        }
    }

    pub fn is_freefall(&self) -> bool {
        self.freefall != 0.0
    }
}

/// Selects one numeric column of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Timestep,
    XPos,
    YPos,
    XVel,
    YVel,
    Speed,
    XAcc,
    YAcc,
    AccMag,
    Freefall,
}

impl Column {
    /// Axis label used on charts.
    pub fn label(self) -> &'static str {
        match self {
            Column::Timestep => "Timestep",
            Column::XPos => "X Position",
            Column::YPos => "Y Position",
            Column::XVel => "X Velocity",
            Column::YVel => "Y Velocity",
            Column::Speed => "Speed",
            Column::XAcc => "X Acceleration",
            Column::YAcc => "Y Acceleration",
            Column::AccMag => "Acceleration Magnitude",
            Column::Freefall => "Freefall",
        }
    }

    fn get(self, row: &ReportRow) -> f64 {
        match self {
            Column::Timestep => row.timestep,
            Column::XPos => row.xpos,
            Column::YPos => row.ypos,
            Column::XVel => row.xvel,
            Column::YVel => row.yvel,
            Column::Speed => row.speed,
            Column::XAcc => row.xacc,
            Column::YAcc => row.yacc,
            Column::AccMag => row.accmag,
            Column::Freefall => row.freefall,
        }
    }
}

/// The whole report, held read-only for the lifetime of the process.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReportTable {
    rows: Vec<ReportRow>,
}

impl ReportTable {
    pub fn new(rows: Vec<ReportRow>) -> Self {
        ReportTable { rows }
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Copies one column out as an `Array1` for range and statistics work.
    pub fn column(&self, column: Column) -> Array1<f64> {
        self.rows.iter().map(|row| column.get(row)).collect()
    }

    /// Pairs two columns row by row, e.g. (xpos, ypos) for a trajectory.
    pub fn pairs(&self, x: Column, y: Column) -> Vec<(f64, f64)> {
        self.rows.iter().map(|row| (x.get(row), y.get(row))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReportTable {
        ReportTable::new(vec![
            ReportRow::from_fields([0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 0.0]),
            ReportRow::from_fields([1.0, 1.5, 2.5, 3.5, 4.5, 5.5, 6.5, 7.5, 8.5, 1.0]),
        ])
    }

    #[test]
    fn test_from_fields_keeps_column_order() {
        let row = sample().rows()[0];
        assert_eq!(row.xpos, 1.0);
        assert_eq!(row.yvel, 4.0);
        assert_eq!(row.accmag, 8.0);
        assert!(!row.is_freefall());
    }

    #[test]
    fn test_from_fields_takes_one_value_per_column() {
        let mut values = [0.0; REPORT_COLUMN_COUNT];
        values[REPORT_COLUMN_COUNT - 1] = 1.0;
        let row = ReportRow::from_fields(values);
        assert!(row.is_freefall());
        assert_eq!(crate::constants::REPORT_COLUMNS.len(), REPORT_COLUMN_COUNT);
    }

    #[test]
    fn test_column_and_pairs() {
        let table = sample();
        assert_eq!(table.column(Column::Speed).to_vec(), vec![5.0, 5.5]);
        assert_eq!(
            table.pairs(Column::XAcc, Column::YAcc),
            vec![(6.0, 7.0), (6.5, 7.5)]
        );
        assert!(table.rows()[1].is_freefall());
    }
}
