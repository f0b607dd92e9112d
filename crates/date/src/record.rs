//! Expanded calendar record.

use std::fmt;

use crate::packed::EPOCH_YEAR;

/// Date and time table of the backup library (`BupDate`).
///
/// Fields are plain bytes with no range enforcement: [`expand`](crate::expand)
/// can produce any byte pattern for pathological inputs and
/// [`compress`](crate::compress) accepts whatever the caller supplies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BupDate {
    /// Years since 1980.
    pub year: u8,

    /// Month (1-12).
    pub month: u8,

    /// Day of month (1-31).
    pub day: u8,

    /// Hour (0-23).
    pub hour: u8,

    /// Minute (0-59).
    pub minute: u8,

    /// Day of week, 0 = Sunday (0-6). Ignored by `compress`.
    pub week: u8,
}

impl BupDate {
    /// Builds a record from its date and time fields. `week` is left at 0.
    pub const fn new(year: u8, month: u8, day: u8, hour: u8, minute: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            week: 0,
        }
    }

    /// Returns the calendar year (1980 + `year`).
    pub fn full_year(&self) -> u16 {
        EPOCH_YEAR + self.year as u16
    }

    /// True for the null input `compress` maps to the BIOS sentinel.
    /// `week` is not part of the check.
    pub fn is_null(&self) -> bool {
        self.year == 0 && self.month == 0 && self.day == 0 && self.hour == 0 && self.minute == 0
    }
}

impl fmt::Display for BupDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}/{:02}/{:02} {:02}:{:02}",
            self.full_year(),
            self.month,
            self.day,
            self.hour,
            self.minute
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_leaves_week_zero() {
        let date = BupDate::new(14, 11, 24, 9, 30);
        assert_eq!(date.week, 0);
        assert_eq!(date.full_year(), 1994);
    }

    #[test]
    fn full_year_upper_bound() {
        assert_eq!(BupDate::new(255, 12, 31, 0, 0).full_year(), 2235);
    }

    #[test]
    fn null_ignores_week() {
        let mut date = BupDate::default();
        assert!(date.is_null());
        date.week = 3;
        assert!(date.is_null());
        date.minute = 1;
        assert!(!date.is_null());
    }

    #[test]
    fn display_matches_bios_log_format() {
        assert_eq!(BupDate::new(1, 1, 1, 0, 42).to_string(), "1981/01/01 00:42");
        assert_eq!(BupDate::new(0, 12, 32, 7, 42).to_string(), "1980/12/32 07:42");
    }
}
