//! Sunrise/sunset estimation and the padded sampling window built around it.

use crate::angles;
use crate::time::{intervals_per_day, MINUTES_PER_DAY, SOLAR_NOON_MINUTES};
use crate::types::SunriseSunset;

/// Sunrise and sunset from the hour angle at which the sun's centre meets
/// the geometric horizon, in whole minutes of local solar time.
///
/// Polar night yields `(720, 720)` and polar day `(0, 1440)`.
pub fn estimate_sunrise_sunset(latitude: f64, day_of_year: u32) -> SunriseSunset {
    let lat_rad = angles::deg_to_rad(latitude);
    let decl_rad = angles::deg_to_rad(angles::solar_declination(day_of_year));
    let cos_h = -lat_rad.tan() * decl_rad.tan();

    if cos_h >= 1.0 {
        SunriseSunset {
            sunrise: SOLAR_NOON_MINUTES,
            sunset: SOLAR_NOON_MINUTES,
        }
    } else if cos_h <= -1.0 {
        SunriseSunset {
            sunrise: 0,
            sunset: MINUTES_PER_DAY,
        }
    } else {
        let h_deg = angles::rad_to_deg(cos_h.acos());
        let half_day_minutes = h_deg / angles::DEGREES_PER_HOUR * 60.0;
        // truncation, not rounding
        SunriseSunset {
            sunrise: (SOLAR_NOON_MINUTES as f64 - half_day_minutes) as i32,
            sunset: (SOLAR_NOON_MINUTES as f64 + half_day_minutes) as i32,
        }
    }
}

impl SunriseSunset {
    pub fn is_polar_night(&self) -> bool {
        self.sunrise == self.sunset
    }

    pub fn is_polar_day(&self) -> bool {
        self.sunrise <= 0 && self.sunset >= MINUTES_PER_DAY
    }

    pub fn daylight_minutes(&self) -> i32 {
        self.sunset - self.sunrise
    }

    /// Inclusive test against local solar minutes. Always false on a
    /// polar-night day.
    pub fn contains(&self, local_minutes: i32) -> bool {
        self.sunrise < self.sunset && local_minutes >= self.sunrise && local_minutes <= self.sunset
    }
}

/// Sample slots for one day, in clock minutes.
///
/// Sunrise and sunset are moved from local solar time onto the sample clock
/// before the buffers are applied. Daylight membership of a slot is decided
/// the other way round: the slot is moved onto local solar time and compared
/// with the unpadded sunrise/sunset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleWindow {
    pub sun: SunriseSunset,
    pub start_minute: i32,
    pub end_minute: i32,
    pub interval_minutes: i32,
    first_interval: i32,
    last_interval: i32,
    correction_minutes: f64,
}

impl SampleWindow {
    /// `correction_minutes` is the clock-to-solar offset (local = clock + correction).
    pub fn new(
        sun: SunriseSunset,
        correction_minutes: f64,
        sunrise_buffer_minutes: i32,
        sunset_buffer_minutes: i32,
        interval_minutes: i32,
    ) -> Self {
        let sunrise_clock = (sun.sunrise as f64 - correction_minutes) as i32;
        let sunset_clock = (sun.sunset as f64 - correction_minutes) as i32;

        let start_minute = (sunrise_clock - sunrise_buffer_minutes).max(0);
        let end_minute = (sunset_clock + sunset_buffer_minutes).min(MINUTES_PER_DAY - 1);

        // never sample before `start_minute`
        let first_interval = (start_minute + interval_minutes - 1) / interval_minutes;
        let last_interval = end_minute
            .div_euclid(interval_minutes)
            .min(intervals_per_day(interval_minutes) - 1);

        Self {
            sun,
            start_minute,
            end_minute,
            interval_minutes,
            first_interval,
            last_interval,
            correction_minutes,
        }
    }

    pub fn len(&self) -> usize {
        (self.last_interval - self.first_interval + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clock minutes of every sample slot, ascending.
    pub fn minutes(&self) -> impl Iterator<Item = i32> + '_ {
        (self.first_interval..=self.last_interval).map(move |i| i * self.interval_minutes)
    }

    pub fn local_minutes(&self, clock_minutes: i32) -> i32 {
        (clock_minutes as f64 + self.correction_minutes) as i32
    }

    pub fn is_daylight(&self, clock_minutes: i32) -> bool {
        self.sun.contains(self.local_minutes(clock_minutes))
    }
}
