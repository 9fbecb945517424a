// src/data_analysis/summary.rs

use ndarray_stats::QuantileExt;

use crate::constants::ACCEL_SPIKE_THRESHOLD;
use crate::data_input::report_data::{Column, ReportTable};

/// Headline numbers for a report, printed after loading.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub rows: usize,
    pub first_timestep: Option<f64>,
    pub last_timestep: Option<f64>,
    pub mean_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub max_accel_magnitude: Option<f64>,
    pub freefall_fraction: f64,
    pub accel_spike_percent: f64,
}

pub fn summarize(table: &ReportTable) -> ReportSummary {
    let rows = table.len();
    let speed = table.column(Column::Speed);
    let accmag = table.column(Column::AccMag);

    let freefall_rows = table.rows().iter().filter(|r| r.is_freefall()).count();
    let spike_rows = accmag.iter().filter(|&&a| a > ACCEL_SPIKE_THRESHOLD).count();
    let fraction = |count: usize| {
        if rows == 0 {
            0.0
        } else {
            count as f64 / rows as f64
        }
    };

    ReportSummary {
        rows,
        first_timestep: table.rows().first().map(|r| r.timestep),
        last_timestep: table.rows().last().map(|r| r.timestep),
        mean_speed: speed.mean(),
        max_speed: speed.max().ok().copied(),
        max_accel_magnitude: accmag.max().ok().copied(),
        freefall_fraction: fraction(freefall_rows),
        accel_spike_percent: fraction(spike_rows) * 100.0,
    }
}

impl ReportSummary {
    /// Logs the summary at info level, one line per figure of merit.
    pub fn log(&self) {
        log::info!("Report summary:");
        log::info!("  Rows: {}", self.rows);
        if let (Some(first), Some(last)) = (self.first_timestep, self.last_timestep) {
            log::info!("  Timesteps: {} .. {}", first, last);
        }
        if let (Some(mean), Some(max)) = (self.mean_speed, self.max_speed) {
            log::info!("  Speed: mean {:.3}, max {:.3}", mean, max);
        }
        if let Some(max_acc) = self.max_accel_magnitude {
            log::info!(
                "  Acceleration: max {:.3}, {:.1}% of steps above {}",
                max_acc,
                self.accel_spike_percent,
                ACCEL_SPIKE_THRESHOLD
            );
        }
        log::info!("  Freefall: {:.1}% of steps", self.freefall_fraction * 100.0);
    }
}
