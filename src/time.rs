//! Calendar and minute-of-day helpers.
//!
//! Day-of-year values are 1-based. Minute-of-day values are signed because
//! window arithmetic (sunrise minus buffer, clock offsets) routinely dips
//! below zero before clamping.

use crate::error::{Result, TrackerError};

pub const MINUTES_PER_DAY: i32 = 1440;
pub const SOLAR_NOON_MINUTES: i32 = 720;

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_year(year: i32) -> u32 {
    if leap_year(year) {
        366
    } else {
        365
    }
}

pub fn days_in_months(year: i32) -> [u32; 12] {
    [
        31,
        if leap_year(year) { 29 } else { 28 },
        31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
    ]
}

/// Day of year for a calendar date. The date must be valid; see
/// [`checked_day_of_year`] for untrusted input.
pub fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    let dim = days_in_months(year);
    let before: u32 = dim[..(month - 1) as usize].iter().sum();
    before + day
}

pub fn checked_day_of_year(year: i32, month: u32, day: u32) -> Result<u32> {
    if !(1..=12).contains(&month) || day == 0 || day > days_in_months(year)[(month - 1) as usize] {
        return Err(TrackerError::InvalidDate { year, month, day });
    }
    Ok(day_of_year(year, month, day))
}

/// Inverse of [`day_of_year`]: walks cumulative month lengths.
pub fn doy_to_month_day(year: i32, doy: u32) -> Result<(u32, u32)> {
    let out_of_range = TrackerError::DayOfYearOutOfRange {
        day_of_year: doy,
        days_in_year: days_in_year(year),
    };
    if doy == 0 {
        return Err(out_of_range);
    }
    let mut remaining = doy;
    for (month_idx, &dim) in days_in_months(year).iter().enumerate() {
        if remaining <= dim {
            return Ok((month_idx as u32 + 1, remaining));
        }
        remaining -= dim;
    }
    Err(out_of_range)
}

pub fn minutes_to_time(total_minutes: i32) -> (i32, i32) {
    (total_minutes / 60, total_minutes % 60)
}

pub fn time_to_minutes(time: (i32, i32)) -> i32 {
    time.0 * 60 + time.1
}

/// Number of samples per day. `interval_minutes` must divide 1440.
pub fn intervals_per_day(interval_minutes: i32) -> i32 {
    MINUTES_PER_DAY / interval_minutes
}
