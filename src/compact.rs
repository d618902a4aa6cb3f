//! Compact nested-array form of a table: one array per day, one element per
//! sample, metadata and minute stamps dropped.
//!
//! Minutes are implied by the sample index and the day's window, so a
//! compact table is only meaningful next to the config that produced it.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{DualAxisTable, SingleAxisTable, TrackerTable};

/// One compact sample. Serializes as a bare number/null for single-axis
/// tables and as a `[tilt, panel_azimuth]` pair for dual-axis tables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompactEntry {
    Dual([Option<f64>; 2]),
    Rotation(Option<f64>),
}

pub type CompactTable = Vec<Vec<CompactEntry>>;

pub fn single_axis_table_to_compact(table: &SingleAxisTable) -> Vec<Vec<Option<f64>>> {
    table
        .days
        .iter()
        .map(|day| day.entries.iter().map(|e| e.rotation).collect())
        .collect()
}

pub fn dual_axis_table_to_compact(table: &DualAxisTable) -> Vec<Vec<[Option<f64>; 2]>> {
    table
        .days
        .iter()
        .map(|day| {
            day.entries
                .iter()
                .map(|e| [e.tilt, e.panel_azimuth])
                .collect()
        })
        .collect()
}

pub fn table_to_compact(table: &TrackerTable) -> CompactTable {
    match table {
        TrackerTable::SingleAxis(t) => single_axis_table_to_compact(t)
            .into_iter()
            .map(|day| day.into_iter().map(CompactEntry::Rotation).collect())
            .collect(),
        TrackerTable::DualAxis(t) => dual_axis_table_to_compact(t)
            .into_iter()
            .map(|day| day.into_iter().map(CompactEntry::Dual).collect())
            .collect(),
    }
}

pub fn compact_to_json(compact: &CompactTable) -> Result<String> {
    Ok(serde_json::to_string(compact)?)
}
