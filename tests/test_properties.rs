//! Property tests for calendar round-trips, angle invariants and the
//! equivalence of the two sampling strategies.

use std::sync::LazyLock;

use proptest::prelude::*;

use solar_lookup::angles::{solar_position, DayGeometry};
use solar_lookup::builder::generate_single_axis_table;
use solar_lookup::config::{LookupTableConfig, SamplingMode, TimeBasis};
use solar_lookup::query::{interpolate_angle, lookup_single_axis};
use solar_lookup::time::{
    day_of_year, days_in_months, doy_to_month_day, minutes_to_time, time_to_minutes,
};
use solar_lookup::types::SingleAxisTable;

static SA_TABLE_15: LazyLock<SingleAxisTable> = LazyLock::new(|| {
    generate_single_axis_table(&LookupTableConfig {
        interval_minutes: 15,
        ..Default::default()
    })
    .expect("valid config")
});

proptest! {
    #[test]
    fn doy_round_trips(year in 1600i32..2800, month in 1u32..=12, day in 1u32..=31) {
        prop_assume!(day <= days_in_months(year)[(month - 1) as usize]);
        let doy = day_of_year(year, month, day);
        prop_assert_eq!(doy_to_month_day(year, doy).unwrap(), (month, day));
    }

    #[test]
    fn minutes_round_trip(m in 0i32..1440) {
        prop_assert_eq!(time_to_minutes(minutes_to_time(m)), m);
    }

    #[test]
    fn interpolated_angle_in_range_and_short(
        a1 in 0.0f64..360.0,
        a2 in 0.0f64..360.0,
        fraction in 0.0f64..1.0,
    ) {
        let v = interpolate_angle(Some(a1), Some(a2), fraction).unwrap();
        prop_assert!((0.0..360.0).contains(&v), "v={}", v);
        // never farther from a1 than the short arc to a2
        let arc = |x: f64, y: f64| { let d = (x - y).abs() % 360.0; d.min(360.0 - d) };
        prop_assert!(arc(a1, v) <= arc(a1, a2) + 1e-9);
    }

    #[test]
    fn zenith_altitude_complement(
        latitude in -90.0f64..=90.0,
        longitude in -180.0f64..=180.0,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0i32..24,
        minute in 0i32..60,
    ) {
        let meridian = (longitude / 15.0).round() * 15.0;
        let pos = solar_position(latitude, longitude, 2026, month, day, hour, minute, meridian);
        prop_assert!((pos.zenith + pos.altitude - 90.0).abs() < 1e-9);
        prop_assert!((0.0..360.0).contains(&pos.azimuth));
        prop_assert!((0.0..24.0).contains(&pos.local_solar_time));
    }

    #[test]
    fn day_geometry_matches_per_instant_model(
        latitude in -89.0f64..=89.0,
        longitude in -180.0f64..=180.0,
        doy in 1u32..=365,
        clock in 0i32..1440,
    ) {
        let (month, day) = doy_to_month_day(2026, doy).unwrap();
        let (hour, minute) = minutes_to_time(clock);
        let full = solar_position(latitude, longitude, 2026, month, day, hour, minute, 0.0);
        let fast = DayGeometry::new(latitude, longitude, 0.0, doy).position_at(clock as f64 / 60.0);
        prop_assert!((full.zenith - fast.zenith).abs() < 1e-9);
        let d = (full.azimuth - fast.azimuth).abs();
        prop_assert!(d.min(360.0 - d) < 1e-9, "{} vs {}", full.azimuth, fast.azimuth);
    }

    #[test]
    fn interpolated_rotation_between_samples(minutes in 346i32..1110) {
        let r = lookup_single_axis(&SA_TABLE_15, 80, minutes).unwrap().unwrap();
        let lo_min = minutes - minutes % 15;
        let before = lookup_single_axis(&SA_TABLE_15, 80, lo_min).unwrap().unwrap();
        let after = lookup_single_axis(&SA_TABLE_15, 80, lo_min + 15).unwrap().unwrap();
        if let (Some(rot), Some(a), Some(b)) = (r.rotation, before.rotation, after.rotation) {
            prop_assert!(rot >= a.min(b) - 1e-9 && rot <= a.max(b) + 1e-9);
        } else {
            prop_assert!(r.rotation.is_none() || minutes % 15 == 0);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(6))]

    #[test]
    fn sampling_modes_build_equal_tables(
        latitude in -70.0f64..=70.0,
        longitude in -180.0f64..=180.0,
        utc in any::<bool>(),
    ) {
        let base = LookupTableConfig {
            interval_minutes: 60,
            latitude,
            longitude,
            standard_meridian: (longitude / 15.0).round() * 15.0,
            time_basis: if utc { TimeBasis::Utc } else { TimeBasis::StandardTime },
            ..Default::default()
        };
        let fast = generate_single_axis_table(&base).unwrap();
        let slow = generate_single_axis_table(&LookupTableConfig {
            sampling: SamplingMode::PerInstant,
            ..base
        })
        .unwrap();

        prop_assert_eq!(fast.days.len(), slow.days.len());
        for (f, s) in fast.days.iter().zip(&slow.days) {
            prop_assert_eq!(f.entries.len(), s.entries.len());
            for (fe, se) in f.entries.iter().zip(&s.entries) {
                prop_assert_eq!(fe.minutes, se.minutes);
                match (fe.rotation, se.rotation) {
                    (Some(a), Some(b)) => prop_assert!((a - b).abs() < 1e-9, "{} vs {}", a, b),
                    (None, None) => {}
                    other => prop_assert!(false, "daylight mismatch {:?}", other),
                }
            }
        }
    }
}
