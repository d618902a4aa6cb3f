pub mod angles;
pub mod builder;
pub mod compact;
pub mod config;
pub mod daylight;
pub mod error;
pub mod query;
pub mod time;
pub mod types;

pub use angles::{
    deg_to_rad, dual_axis_angles, equation_of_time, hour_angle, intermediate_angle_b,
    local_solar_time, normalize_angle, optimal_fixed_tilt, rad_to_deg, seasonal_tilt_adjustment,
    single_axis_rotation, solar_altitude, solar_azimuth, solar_declination, solar_position,
    solar_position_at, solar_time_correction, solar_zenith_angle, DayGeometry, DEGREES_PER_HOUR,
    EARTH_AXIAL_TILT,
};

pub use builder::{
    generate_dual_axis_table, generate_single_axis_table, generate_table, generate_tracker_table,
    DUAL_AXIS_ENTRY_BYTES, SINGLE_AXIS_ENTRY_BYTES,
};

pub use compact::{
    compact_to_json, dual_axis_table_to_compact, single_axis_table_to_compact, table_to_compact,
    CompactEntry, CompactTable,
};

pub use config::{LookupTableConfig, SamplingMode, TimeBasis};

pub use daylight::{estimate_sunrise_sunset, SampleWindow};

pub use error::{Result, TrackerError};

pub use query::{
    find_bracketing_entries, interpolate_angle, interpolate_linear, lookup_dual_axis,
    lookup_single_axis, Bracket, TimedEntry,
};

pub use time::{
    checked_day_of_year, day_of_year, days_in_months, days_in_year, doy_to_month_day,
    intervals_per_day, leap_year, minutes_to_time, time_to_minutes, MINUTES_PER_DAY,
    SOLAR_NOON_MINUTES,
};

pub use types::{
    DayData, DualAxisAngles, DualAxisEntry, DualAxisTable, LookupTable, Season, SingleAxisEntry,
    SingleAxisTable, SolarPosition, SunriseSunset, TableMetadata, TrackerKind, TrackerTable,
};
