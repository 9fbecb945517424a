// src/views.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::data_input::report_data::Column;
use crate::error::{ReportError, Result};

/// A named chart over the report. Declaration order is the render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    AccelerationScatter,
    PositionScatter,
    SpeedHistogram,
    SpeedOverTime,
    DirectionOverTime,
    AccelerationMagnitudeOverTime,
    VelocityScatter,
}

impl View {
    pub const ALL: [View; 7] = [
        View::AccelerationScatter,
        View::PositionScatter,
        View::SpeedHistogram,
        View::SpeedOverTime,
        View::DirectionOverTime,
        View::AccelerationMagnitudeOverTime,
        View::VelocityScatter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            View::AccelerationScatter => "acceleration-scatter",
            View::PositionScatter => "position-scatter",
            View::SpeedHistogram => "speed-histogram",
            View::SpeedOverTime => "speed-over-time",
            View::DirectionOverTime => "direction-over-time",
            View::AccelerationMagnitudeOverTime => "acceleration-magnitude-over-time",
            View::VelocityScatter => "velocity-scatter",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::AccelerationScatter => "Acceleration (X vs Y)",
            View::PositionScatter => "Trajectory (X vs Y Position)",
            View::SpeedHistogram => "Y Position Histogram",
            View::SpeedOverTime => "Speed over Time",
            View::DirectionOverTime => "Direction over Time",
            View::AccelerationMagnitudeOverTime => "Acceleration Magnitude over Time",
            View::VelocityScatter => "Velocity (X vs Y)",
        }
    }

    /// Enabled unless the view was switched off in the original plotting script.
    pub fn enabled_by_default(self) -> bool {
        !matches!(
            self,
            View::DirectionOverTime | View::AccelerationMagnitudeOverTime | View::VelocityScatter
        )
    }

    /// Column pair plotted as x/y, for views that draw two report columns against each other.
    pub fn columns(self) -> Option<(Column, Column)> {
        match self {
            View::AccelerationScatter => Some((Column::XAcc, Column::YAcc)),
            View::PositionScatter => Some((Column::XPos, Column::YPos)),
            View::SpeedOverTime => Some((Column::Timestep, Column::Speed)),
            View::AccelerationMagnitudeOverTime => Some((Column::Timestep, Column::AccMag)),
            View::VelocityScatter => Some((Column::XVel, Column::YVel)),
            View::SpeedHistogram | View::DirectionOverTime => None,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for View {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        View::ALL
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ReportError::UnknownView(s.to_string()))
    }
}

/// On-disk form: `{"views": {"velocity-scatter": true, "speed-histogram": false}}`.
#[derive(Debug, Default, Deserialize)]
struct ViewConfigFile {
    #[serde(default)]
    views: BTreeMap<String, bool>,
}

/// Which views to render. Every view always has an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSelection {
    enabled: BTreeMap<View, bool>,
}

impl Default for ViewSelection {
    fn default() -> Self {
        ViewSelection {
            enabled: View::ALL.iter().map(|&v| (v, v.enabled_by_default())).collect(),
        }
    }
}

impl ViewSelection {
    /// Every view disabled.
    pub fn none() -> Self {
        ViewSelection {
            enabled: View::ALL.iter().map(|&v| (v, false)).collect(),
        }
    }

    pub fn set(&mut self, view: View, enabled: bool) -> &mut Self {
        self.enabled.insert(view, enabled);
        self
    }

    pub fn is_enabled(&self, view: View) -> bool {
        self.enabled.get(&view).copied().unwrap_or(false)
    }

    /// Enabled views in render order.
    pub fn enabled_views(&self) -> Vec<View> {
        self.enabled
            .iter()
            .filter(|(_, on)| **on)
            .map(|(&v, _)| v)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (View, bool)> + '_ {
        self.enabled.iter().map(|(&v, &on)| (v, on))
    }

    /// Applies a JSON view config on top of the current selection.
    pub fn apply_json(&mut self, json: &str) -> Result<()> {
        let file: ViewConfigFile = serde_json::from_str(json)?;
        for (name, on) in file.views {
            let view: View = name.parse()?;
            self.set(view, on);
        }
        Ok(())
    }

    pub fn apply_file(&mut self, path: &Path) -> Result<()> {
        let json = fs::read_to_string(path)?;
        self.apply_json(&json)
    }
}
