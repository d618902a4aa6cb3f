//! Bracketing search and interpolation over a built table.

use crate::error::{Result, TrackerError};
use crate::time::MINUTES_PER_DAY;
use crate::types::{
    DayData, DualAxisEntry, DualAxisTable, LookupTable, SingleAxisEntry, SingleAxisTable,
};

/// Anything stored in a day's entry list.
pub trait TimedEntry {
    fn minutes(&self) -> i32;
}

impl TimedEntry for SingleAxisEntry {
    fn minutes(&self) -> i32 {
        self.minutes
    }
}

impl TimedEntry for DualAxisEntry {
    fn minutes(&self) -> i32 {
        self.minutes
    }
}

/// The sample at or before a query minute, the next sample if the query
/// falls strictly between two, and the position between them in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket<'a, E> {
    pub before: &'a E,
    pub after: Option<&'a E>,
    pub fraction: f64,
}

/// `None` when `entries` is empty or `minutes` lies outside the sampled span.
pub fn find_bracketing_entries<E: TimedEntry>(
    entries: &[E],
    interval_minutes: i32,
    minutes: i32,
) -> Option<Bracket<'_, E>> {
    let (first, last) = (entries.first()?, entries.last()?);
    let first_minutes = first.minutes();
    if minutes < first_minutes || minutes > last.minutes() {
        return None;
    }

    let idx_before =
        ((minutes - first_minutes) / interval_minutes).min(entries.len() as i32 - 1) as usize;
    let before = &entries[idx_before];
    let t0 = before.minutes();

    match entries.get(idx_before + 1) {
        Some(after) if minutes != t0 => {
            let t1 = after.minutes();
            Some(Bracket {
                before,
                after: Some(after),
                fraction: (minutes - t0) as f64 / (t1 - t0) as f64,
            })
        }
        _ => Some(Bracket {
            before,
            after: None,
            fraction: 0.0,
        }),
    }
}

pub fn interpolate_linear(v1: Option<f64>, v2: Option<f64>, fraction: f64) -> Option<f64> {
    let (a, b) = (v1?, v2?);
    Some(a + fraction * (b - a))
}

/// Interpolate compass angles along the shorter arc. Result is in [0, 360).
pub fn interpolate_angle(a1: Option<f64>, a2: Option<f64>, fraction: f64) -> Option<f64> {
    let (v1, v2) = (a1?, a2?);
    let diff = v2 - v1;
    let adjusted_diff = if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    };
    Some(crate::angles::normalize_angle(v1 + adjusted_diff * fraction))
}

fn day_for_query<E>(table: &LookupTable<E>, day_of_year: u32, minutes: i32) -> Result<&DayData<E>> {
    // tables can be deserialized or assembled by hand
    table.config.validate()?;
    if !(0..MINUTES_PER_DAY).contains(&minutes) {
        return Err(TrackerError::MinuteOutOfRange { minutes });
    }
    table
        .day(day_of_year)
        .ok_or(TrackerError::DayOfYearOutOfRange {
            day_of_year,
            days_in_year: table.days.len() as u32,
        })
}

/// Rotation at `minutes` on `day_of_year`.
///
/// `Ok(None)` means the minute is outside the day's sampled window. A
/// returned entry may still carry `rotation: None` for buffer slots outside
/// daylight.
pub fn lookup_single_axis(
    table: &SingleAxisTable,
    day_of_year: u32,
    minutes: i32,
) -> Result<Option<SingleAxisEntry>> {
    let day = day_for_query(table, day_of_year, minutes)?;
    let Some(bracket) = find_bracketing_entries(&day.entries, table.config.interval_minutes, minutes)
    else {
        return Ok(None);
    };
    let rotation = match bracket.after {
        None => bracket.before.rotation,
        Some(after) => interpolate_linear(bracket.before.rotation, after.rotation, bracket.fraction),
    };
    Ok(Some(SingleAxisEntry { minutes, rotation }))
}

/// Tilt and panel azimuth at `minutes` on `day_of_year`; azimuth
/// interpolation takes the short way around north.
pub fn lookup_dual_axis(
    table: &DualAxisTable,
    day_of_year: u32,
    minutes: i32,
) -> Result<Option<DualAxisEntry>> {
    let day = day_for_query(table, day_of_year, minutes)?;
    let Some(bracket) = find_bracketing_entries(&day.entries, table.config.interval_minutes, minutes)
    else {
        return Ok(None);
    };
    let before = bracket.before;
    let entry = match bracket.after {
        None => DualAxisEntry {
            minutes,
            tilt: before.tilt,
            panel_azimuth: before.panel_azimuth,
        },
        Some(after) => DualAxisEntry {
            minutes,
            tilt: interpolate_linear(before.tilt, after.tilt, bracket.fraction),
            panel_azimuth: interpolate_angle(before.panel_azimuth, after.panel_azimuth, bracket.fraction),
        },
    };
    Ok(Some(entry))
}
