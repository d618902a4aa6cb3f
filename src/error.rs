//! Error types for table generation and lookup.

use thiserror::Error;

/// Errors raised by configuration checks, calendar conversions and lookups.
///
/// A query that lands outside a day's sampled window is not an error; lookups
/// report that case as `Ok(None)`.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },

    #[error("day of year {day_of_year} outside 1..={days_in_year}")]
    DayOfYearOutOfRange { day_of_year: u32, days_in_year: u32 },

    #[error("minute of day {minutes} outside 0..1440")]
    MinuteOutOfRange { minutes: i32 },

    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TrackerError {
    /// True for every caller precondition violation (bad config, bad index, bad date).
    pub fn is_invalid_configuration(&self) -> bool {
        !matches!(self, Self::Json(_))
    }

    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
