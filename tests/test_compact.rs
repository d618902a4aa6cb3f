use std::sync::LazyLock;

use serde_json::Value;

use solar_lookup::builder::generate_tracker_table;
use solar_lookup::compact::*;
use solar_lookup::config::LookupTableConfig;
use solar_lookup::types::{TrackerKind, TrackerTable};

static SCENARIO: LazyLock<LookupTableConfig> = LazyLock::new(|| LookupTableConfig {
    interval_minutes: 5,
    latitude: 39.8,
    longitude: -89.6,
    year: 2026,
    ..Default::default()
});

#[test]
fn test_single_axis_scenario() {
    let table = generate_tracker_table(TrackerKind::SingleAxis, &SCENARIO).unwrap();
    let TrackerTable::SingleAxis(inner) = &table else {
        panic!("expected a single-axis table");
    };
    assert_eq!(inner.days.len(), 365);
    assert!(inner.days.iter().all(|d| !d.entries.is_empty()));
    assert!(inner.metadata.total_entries > 0);

    let compact = table_to_compact(&table);
    assert_eq!(compact.len(), 365);
    for (day, values) in inner.days.iter().zip(&compact) {
        assert_eq!(day.entries.len(), values.len());
    }

    let json: Value = serde_json::from_str(&compact_to_json(&compact).unwrap()).unwrap();
    let days = json.as_array().unwrap();
    assert_eq!(days.len(), 365);
    let mut saw_null = false;
    for day in days {
        for v in day.as_array().unwrap() {
            assert!(v.is_number() || v.is_null(), "unexpected element {v}");
            saw_null |= v.is_null();
        }
    }
    assert!(saw_null, "buffer slots should serialize as null");
}

#[test]
fn test_dual_axis_compact_pairs() {
    let config = LookupTableConfig {
        interval_minutes: 30,
        ..Default::default()
    };
    let table = generate_tracker_table(TrackerKind::DualAxis, &config).unwrap();
    let TrackerTable::DualAxis(inner) = &table else {
        panic!("expected a dual-axis table");
    };

    let pairs = dual_axis_table_to_compact(inner);
    assert_eq!(pairs.len(), 365);
    let sample = pairs[0]
        .iter()
        .find(|p| p[0].is_some())
        .expect("at least one daylight entry");
    assert!(sample[1].is_some());
    assert!(pairs[0].iter().any(|p| p == &[None, None]));

    let json: Value = serde_json::to_value(table_to_compact(&table)).unwrap();
    let first_day = json[0].as_array().unwrap();
    assert_eq!(first_day[0], serde_json::json!([null, null]));
    for v in first_day {
        let pair = v.as_array().unwrap();
        assert_eq!(pair.len(), 2);
        assert_eq!(pair[0].is_null(), pair[1].is_null());
    }
}

#[test]
fn test_compact_is_a_pure_projection() {
    let config = LookupTableConfig {
        interval_minutes: 60,
        ..Default::default()
    };
    let table = generate_tracker_table(TrackerKind::SingleAxis, &config).unwrap();
    let TrackerTable::SingleAxis(inner) = &table else {
        panic!("expected a single-axis table");
    };
    let rotations = single_axis_table_to_compact(inner);
    let tagged = table_to_compact(&table);
    for ((day, plain), wrapped) in inner.days.iter().zip(&rotations).zip(&tagged) {
        for ((entry, value), compact) in day.entries.iter().zip(plain).zip(wrapped) {
            assert_eq!(entry.rotation, *value);
            assert_eq!(*compact, CompactEntry::Rotation(*value));
        }
    }
}

#[test]
fn test_compact_json_parses_back() {
    let json = "[[null, 1.5], [[null, null], [10.0, 355.0]]]";
    let parsed: CompactTable = serde_json::from_str(json).unwrap();
    assert_eq!(
        parsed,
        vec![
            vec![CompactEntry::Rotation(None), CompactEntry::Rotation(Some(1.5))],
            vec![
                CompactEntry::Dual([None, None]),
                CompactEntry::Dual([Some(10.0), Some(355.0)]),
            ],
        ]
    );
}

#[test]
fn test_tracker_table_json_carries_tag() {
    let config = LookupTableConfig {
        interval_minutes: 120,
        ..Default::default()
    };
    let table = generate_tracker_table(TrackerKind::DualAxis, &config).unwrap();
    let value = serde_json::to_value(&table).unwrap();
    assert_eq!(value["tracker"], "dual_axis");
    assert_eq!(value["days"].as_array().unwrap().len(), 365);
    assert_eq!(value["config"]["time_basis"], "standard_time");

    let back: TrackerTable = serde_json::from_value(value).unwrap();
    assert_eq!(back.kind(), TrackerKind::DualAxis);
    assert_eq!(back.metadata().total_entries, table.metadata().total_entries);
}
