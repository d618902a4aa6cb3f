use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::LookupTableConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Summer,
    Winter,
    Spring,
    Fall,
}

/// Sun position for one instant. Angles in degrees, `equation_of_time` in
/// minutes, `local_solar_time` in hours within [0, 24).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarPosition {
    pub day_of_year: u32,
    pub declination: f64,
    pub equation_of_time: f64,
    pub local_solar_time: f64,
    pub hour_angle: f64,
    pub zenith: f64,
    pub altitude: f64,
    pub azimuth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualAxisAngles {
    pub tilt: f64,
    pub panel_azimuth: f64,
}

/// Sunrise and sunset in minutes after local solar midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunriseSunset {
    pub sunrise: i32,
    pub sunset: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SingleAxisEntry {
    pub minutes: i32,
    pub rotation: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualAxisEntry {
    pub minutes: i32,
    pub tilt: Option<f64>,
    pub panel_azimuth: Option<f64>,
}

/// One sampled day. `entries` are strictly increasing in `minutes` and
/// spaced by the table's interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayData<E> {
    pub day_of_year: u32,
    pub sunrise_minutes: i32,
    pub sunset_minutes: i32,
    pub entries: Vec<E>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableMetadata {
    pub generated_at: DateTime<Utc>,
    pub total_entries: usize,
    pub storage_estimate_kb: f64,
}

/// A full year of samples. `days[d - 1]` holds day-of-year `d`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupTable<E> {
    pub config: LookupTableConfig,
    pub days: Vec<DayData<E>>,
    pub metadata: TableMetadata,
}

impl<E> LookupTable<E> {
    pub fn day(&self, day_of_year: u32) -> Option<&DayData<E>> {
        let idx = day_of_year.checked_sub(1)? as usize;
        self.days.get(idx)
    }
}

pub type SingleAxisTable = LookupTable<SingleAxisEntry>;
pub type DualAxisTable = LookupTable<DualAxisEntry>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackerKind {
    SingleAxis,
    DualAxis,
}

/// Table of either tracker shape, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tracker", rename_all = "snake_case")]
pub enum TrackerTable {
    SingleAxis(SingleAxisTable),
    DualAxis(DualAxisTable),
}

impl TrackerTable {
    pub fn kind(&self) -> TrackerKind {
        match self {
            Self::SingleAxis(_) => TrackerKind::SingleAxis,
            Self::DualAxis(_) => TrackerKind::DualAxis,
        }
    }

    pub fn config(&self) -> &LookupTableConfig {
        match self {
            Self::SingleAxis(t) => &t.config,
            Self::DualAxis(t) => &t.config,
        }
    }

    pub fn metadata(&self) -> &TableMetadata {
        match self {
            Self::SingleAxis(t) => &t.metadata,
            Self::DualAxis(t) => &t.metadata,
        }
    }
}
