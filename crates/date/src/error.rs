//! Error types for the bup-date crate.

/// Error type for conversions between [`BupDate`](crate::BupDate) and
/// calendar types outside this crate.
///
/// The codec itself never fails; these only arise at the `chrono` boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateError {
    /// Returned when a year cannot be stored as an offset from 1980.
    #[error("year {year} out of range (must be 1980..=2235)")]
    YearOutOfRange {
        /// The year that was provided.
        year: i32,
    },

    /// Returned when year, month and day do not form a calendar date.
    #[error("invalid date: {year:04}/{month:02}/{day:02}")]
    InvalidDate {
        /// Calendar year.
        year: i32,
        /// Month number.
        month: u8,
        /// Day of month.
        day: u8,
    },

    /// Returned when hour and minute do not form a time of day.
    #[error("invalid time: {hour:02}:{minute:02}")]
    InvalidTime {
        /// Hour field.
        hour: u8,
        /// Minute field.
        minute: u8,
    },
}
