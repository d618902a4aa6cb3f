//! Full-year table generation.

use chrono::Utc;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::angles::{self, DayGeometry};
use crate::config::{LookupTableConfig, SamplingMode};
use crate::daylight::{estimate_sunrise_sunset, SampleWindow};
use crate::error::Result;
use crate::time::{days_in_year, doy_to_month_day, minutes_to_time};
use crate::types::{
    DayData, DualAxisEntry, DualAxisTable, LookupTable, SingleAxisEntry, SingleAxisTable,
    SolarPosition, TableMetadata, TrackerKind, TrackerTable,
};

/// Storage hint per single-axis entry (one f32 rotation).
pub const SINGLE_AXIS_ENTRY_BYTES: usize = 4;
/// Storage hint per dual-axis entry (two f32 angles).
pub const DUAL_AXIS_ENTRY_BYTES: usize = 8;

/// Build a table for every day of `config.year`.
///
/// `entry_fn(minutes, position, is_daylight)` turns one sample into an
/// entry. `bytes_per_entry` only feeds the storage estimate. Days are
/// computed in parallel and assembled in day-of-year order.
pub fn generate_table<E, F>(
    config: &LookupTableConfig,
    entry_fn: F,
    bytes_per_entry: usize,
) -> Result<LookupTable<E>>
where
    E: Send,
    F: Fn(i32, &SolarPosition, bool) -> E + Sync,
{
    config.validate()?;
    let n_days = days_in_year(config.year);

    let days = (1..=n_days)
        .into_par_iter()
        .map(|doy| build_day(config, doy, &entry_fn))
        .collect::<Result<Vec<_>>>()?;

    let total_entries: usize = days.iter().map(|d| d.entries.len()).sum();
    let storage_estimate_kb = (total_entries * bytes_per_entry) as f64 / 1024.0;
    info!(
        year = config.year,
        days = days.len(),
        total_entries,
        storage_estimate_kb,
        "generated lookup table"
    );

    Ok(LookupTable {
        config: *config,
        days,
        metadata: TableMetadata {
            generated_at: Utc::now(),
            total_entries,
            storage_estimate_kb,
        },
    })
}

fn build_day<E, F>(config: &LookupTableConfig, doy: u32, entry_fn: &F) -> Result<DayData<E>>
where
    F: Fn(i32, &SolarPosition, bool) -> E,
{
    let sun = estimate_sunrise_sunset(config.latitude, doy);
    if sun.is_polar_night() || sun.is_polar_day() {
        debug!(
            doy,
            polar_night = sun.is_polar_night(),
            "sun does not cross the horizon"
        );
    }

    let reference_meridian = config.reference_meridian();
    let geometry = DayGeometry::new(config.latitude, config.longitude, reference_meridian, doy);
    let window = SampleWindow::new(
        sun,
        geometry.correction_minutes(),
        config.sunrise_buffer_minutes,
        config.sunset_buffer_minutes,
        config.interval_minutes,
    );

    let mut entries = Vec::with_capacity(window.len());
    match config.sampling {
        SamplingMode::Precomputed => {
            for mins in window.minutes() {
                let pos = geometry.position_at(mins as f64 / 60.0);
                entries.push(entry_fn(mins, &pos, window.is_daylight(mins)));
            }
        }
        SamplingMode::PerInstant => {
            let (month, day) = doy_to_month_day(config.year, doy)?;
            for mins in window.minutes() {
                let (hour, minute) = minutes_to_time(mins);
                let pos = angles::solar_position(
                    config.latitude,
                    config.longitude,
                    config.year,
                    month,
                    day,
                    hour,
                    minute,
                    reference_meridian,
                );
                entries.push(entry_fn(mins, &pos, window.is_daylight(mins)));
            }
        }
    }

    Ok(DayData {
        day_of_year: doy,
        sunrise_minutes: sun.sunrise,
        sunset_minutes: sun.sunset,
        entries,
    })
}

pub fn generate_single_axis_table(config: &LookupTableConfig) -> Result<SingleAxisTable> {
    let latitude = config.latitude;
    generate_table(
        config,
        |minutes, pos, is_daylight| SingleAxisEntry {
            minutes,
            rotation: is_daylight.then(|| angles::single_axis_rotation(pos, latitude)),
        },
        SINGLE_AXIS_ENTRY_BYTES,
    )
}

pub fn generate_dual_axis_table(config: &LookupTableConfig) -> Result<DualAxisTable> {
    generate_table(
        config,
        |minutes, pos, is_daylight| {
            let orientation = is_daylight.then(|| angles::dual_axis_angles(pos));
            DualAxisEntry {
                minutes,
                tilt: orientation.map(|a| a.tilt),
                panel_azimuth: orientation.map(|a| a.panel_azimuth),
            }
        },
        DUAL_AXIS_ENTRY_BYTES,
    )
}

pub fn generate_tracker_table(kind: TrackerKind, config: &LookupTableConfig) -> Result<TrackerTable> {
    Ok(match kind {
        TrackerKind::SingleAxis => TrackerTable::SingleAxis(generate_single_axis_table(config)?),
        TrackerKind::DualAxis => TrackerTable::DualAxis(generate_dual_axis_table(config)?),
    })
}
