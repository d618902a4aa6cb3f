//! Lookup table configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::time::MINUTES_PER_DAY;

/// Clock that sample minutes are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBasis {
    /// Clock time at the configured standard meridian.
    #[default]
    StandardTime,
    /// Coordinated universal time (reference meridian 0°).
    Utc,
}

/// How sun positions are produced for each sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingMode {
    /// Per-day sine/cosine factors reused for every sample of the day.
    #[default]
    Precomputed,
    /// Full solar position model evaluated at every sample.
    PerInstant,
}

/// Everything a table depends on. Two tables built from equal configs are
/// equal apart from `metadata.generated_at`.
///
/// Every field is optional when deserialized; missing ones take the
/// [`Default`] values (5 minute interval, Springfield IL, 2026, 30 minute
/// buffers).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LookupTableConfig {
    pub interval_minutes: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub standard_meridian: f64,
    pub year: i32,
    pub sunrise_buffer_minutes: i32,
    pub sunset_buffer_minutes: i32,
    pub time_basis: TimeBasis,
    pub sampling: SamplingMode,
}

impl Default for LookupTableConfig {
    fn default() -> Self {
        Self {
            interval_minutes: 5,
            latitude: 39.8,
            longitude: -89.6,
            standard_meridian: -90.0,
            year: 2026,
            sunrise_buffer_minutes: 30,
            sunset_buffer_minutes: 30,
            time_basis: TimeBasis::StandardTime,
            sampling: SamplingMode::Precomputed,
        }
    }
}

impl LookupTableConfig {
    /// Parse a JSON object and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Meridian the sample clock is referenced to.
    pub fn reference_meridian(&self) -> f64 {
        match self.time_basis {
            TimeBasis::StandardTime => self.standard_meridian,
            TimeBasis::Utc => 0.0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.interval_minutes <= 0 || MINUTES_PER_DAY % self.interval_minutes != 0 {
            return Err(TrackerError::config(
                "interval_minutes",
                format!("{} does not divide {MINUTES_PER_DAY}", self.interval_minutes),
            ));
        }
        check_range("latitude", self.latitude, 90.0)?;
        check_range("longitude", self.longitude, 180.0)?;
        check_range("standard_meridian", self.standard_meridian, 180.0)?;
        if self.sunrise_buffer_minutes < 0 {
            return Err(TrackerError::config(
                "sunrise_buffer_minutes",
                format!("{} is negative", self.sunrise_buffer_minutes),
            ));
        }
        if self.sunset_buffer_minutes < 0 {
            return Err(TrackerError::config(
                "sunset_buffer_minutes",
                format!("{} is negative", self.sunset_buffer_minutes),
            ));
        }
        Ok(())
    }
}

fn check_range(field: &'static str, value: f64, limit: f64) -> Result<()> {
    if value.is_finite() && value.abs() <= limit {
        Ok(())
    } else {
        Err(TrackerError::config(
            field,
            format!("{value} outside [-{limit}, {limit}]"),
        ))
    }
}
