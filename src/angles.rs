//! Solar position model and panel orientation formulas.
//!
//! All angles are degrees. Day numbers are 1-based day-of-year.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

use crate::time::day_of_year;
use crate::types::{DualAxisAngles, Season, SolarPosition};

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Wrap into [0, 360).
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

pub fn intermediate_angle_b(n: u32) -> f64 {
    deg_to_rad((n as f64 - 1.0) * (360.0 / 365.0))
}

/// Equation of time in minutes (Spencer's Fourier series).
pub fn equation_of_time(n: u32) -> f64 {
    let b = intermediate_angle_b(n);
    229.18
        * (0.000075
            + 0.001868 * b.cos()
            - 0.032077 * b.sin()
            - 0.014615 * (2.0 * b).cos()
            - 0.040849 * (2.0 * b).sin())
}

pub fn solar_declination(n: u32) -> f64 {
    EARTH_AXIAL_TILT * deg_to_rad(360.0 * ((284 + n) as f64 / 365.0)).sin()
}

/// Hours to add to a clock reading at `reference_meridian` to get local
/// solar time. A reference meridian of 0 gives the UTC correction.
pub fn solar_time_correction(longitude: f64, reference_meridian: f64, eot: f64) -> f64 {
    (4.0 * (longitude - reference_meridian) + eot) / 60.0
}

pub fn local_solar_time(clock_hours: f64, longitude: f64, reference_meridian: f64, n: u32) -> f64 {
    let correction = solar_time_correction(longitude, reference_meridian, equation_of_time(n));
    (clock_hours + correction).rem_euclid(24.0)
}

pub fn hour_angle(local_solar_time: f64) -> f64 {
    DEGREES_PER_HOUR * (local_solar_time - 12.0)
}

pub fn solar_zenith_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    zenith_from_factors(
        lat_rad.sin(),
        lat_rad.cos(),
        dec_rad.sin(),
        dec_rad.cos(),
        deg_to_rad(hour_angle),
    )
}

pub fn solar_altitude(zenith_angle: f64) -> f64 {
    90.0 - zenith_angle
}

/// Azimuth clockwise from north, in [0, 360).
pub fn solar_azimuth(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    azimuth_from_factors(
        lat_rad.sin(),
        lat_rad.cos(),
        dec_rad.sin(),
        dec_rad.cos(),
        deg_to_rad(hour_angle),
    )
}

fn zenith_from_factors(sin_lat: f64, cos_lat: f64, sin_dec: f64, cos_dec: f64, ha_rad: f64) -> f64 {
    let cos_zenith = sin_lat * sin_dec + cos_lat * cos_dec * ha_rad.cos();
    rad_to_deg(cos_zenith.clamp(-1.0, 1.0).acos())
}

fn azimuth_from_factors(sin_lat: f64, cos_lat: f64, sin_dec: f64, cos_dec: f64, ha_rad: f64) -> f64 {
    let sin_az = -cos_dec * ha_rad.sin();
    let cos_az = sin_dec * cos_lat - cos_dec * sin_lat * ha_rad.cos();
    normalize_angle(rad_to_deg(sin_az.atan2(cos_az)))
}

/// Sun position for a clock reading taken at `standard_meridian`.
#[allow(clippy::too_many_arguments)]
pub fn solar_position(
    latitude: f64,
    longitude: f64,
    year: i32,
    month: u32,
    day: u32,
    hour: i32,
    minute: i32,
    standard_meridian: f64,
) -> SolarPosition {
    let n = day_of_year(year, month, day);
    let clock_hours = hour as f64 + minute as f64 / 60.0;
    let eot = equation_of_time(n);
    let decl = solar_declination(n);
    let lst = local_solar_time(clock_hours, longitude, standard_meridian, n);
    let ha = hour_angle(lst);
    let zenith = solar_zenith_angle(latitude, decl, ha);
    SolarPosition {
        day_of_year: n,
        declination: decl,
        equation_of_time: eot,
        local_solar_time: lst,
        hour_angle: ha,
        zenith,
        altitude: solar_altitude(zenith),
        azimuth: solar_azimuth(latitude, decl, ha),
    }
}

/// Sun position at a zoned instant. The day of year is taken from the UTC date.
pub fn solar_position_at<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    dt: &DateTime<Tz>,
) -> SolarPosition {
    let utc = dt.with_timezone(&Utc);
    let n = day_of_year(utc.year(), utc.month(), utc.day());
    let utc_hours =
        utc.hour() as f64 + utc.minute() as f64 / 60.0 + utc.second() as f64 / 3600.0;
    DayGeometry::new(latitude, longitude, 0.0, n).position_at(utc_hours)
}

/// Per-day factors shared by every sample of one day.
///
/// `position_at` matches [`solar_position`] for the same day, longitude and
/// reference meridian to within floating-point rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayGeometry {
    pub day_of_year: u32,
    pub declination: f64,
    pub equation_of_time: f64,
    /// Clock-to-solar correction in hours.
    pub correction: f64,
    sin_lat: f64,
    cos_lat: f64,
    sin_dec: f64,
    cos_dec: f64,
}

impl DayGeometry {
    pub fn new(latitude: f64, longitude: f64, reference_meridian: f64, day_of_year: u32) -> Self {
        let lat_rad = deg_to_rad(latitude);
        let declination = solar_declination(day_of_year);
        let dec_rad = deg_to_rad(declination);
        let equation_of_time = equation_of_time(day_of_year);
        Self {
            day_of_year,
            declination,
            equation_of_time,
            correction: solar_time_correction(longitude, reference_meridian, equation_of_time),
            sin_lat: lat_rad.sin(),
            cos_lat: lat_rad.cos(),
            sin_dec: dec_rad.sin(),
            cos_dec: dec_rad.cos(),
        }
    }

    pub fn correction_minutes(&self) -> f64 {
        self.correction * 60.0
    }

    pub fn position_at(&self, clock_hours: f64) -> SolarPosition {
        let lst = (clock_hours + self.correction).rem_euclid(24.0);
        let ha = hour_angle(lst);
        let ha_rad = deg_to_rad(ha);
        let zenith = zenith_from_factors(self.sin_lat, self.cos_lat, self.sin_dec, self.cos_dec, ha_rad);
        SolarPosition {
            day_of_year: self.day_of_year,
            declination: self.declination,
            equation_of_time: self.equation_of_time,
            local_solar_time: lst,
            hour_angle: ha,
            zenith,
            altitude: solar_altitude(zenith),
            azimuth: azimuth_from_factors(self.sin_lat, self.cos_lat, self.sin_dec, self.cos_dec, ha_rad),
        }
    }
}

/// Rotation of a north-south single-axis tracker, positive toward west.
pub fn single_axis_rotation(pos: &SolarPosition, latitude: f64) -> f64 {
    let ha_rad = deg_to_rad(pos.hour_angle);
    let lat_rad = deg_to_rad(latitude);
    rad_to_deg(ha_rad.tan().atan2(lat_rad.cos()))
}

/// Dual-axis tracker pointing straight at the sun.
pub fn dual_axis_angles(pos: &SolarPosition) -> DualAxisAngles {
    DualAxisAngles {
        tilt: pos.zenith,
        panel_azimuth: normalize_angle(pos.azimuth + 180.0),
    }
}

/// Empirical year-round fixed tilt.
pub fn optimal_fixed_tilt(latitude: f64) -> f64 {
    0.76 * latitude.abs() + 3.1
}

pub fn seasonal_tilt_adjustment(latitude: f64, season: Season) -> f64 {
    match season {
        Season::Summer => latitude.abs() - 15.0,
        Season::Winter => latitude.abs() + 15.0,
        Season::Spring | Season::Fall => latitude.abs(),
    }
}
