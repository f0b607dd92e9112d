//! Conversions between [`BupDate`] and `chrono` naive date-times.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::DateError;
use crate::packed::{EPOCH_YEAR, MAX_YEAR};
use crate::record::BupDate;

impl BupDate {
    /// Builds a record from a `chrono` date-time, truncating seconds.
    ///
    /// `week` is filled in from the Gregorian weekday (0 = Sunday).
    ///
    /// # Errors
    ///
    /// Returns [`DateError::YearOutOfRange`] if the year is outside
    /// 1980..=2235.
    pub fn from_naive(datetime: NaiveDateTime) -> Result<Self, DateError> {
        let year = datetime.year();
        if !(i32::from(EPOCH_YEAR)..=i32::from(MAX_YEAR)).contains(&year) {
            return Err(DateError::YearOutOfRange { year });
        }
        Ok(Self {
            year: (year - i32::from(EPOCH_YEAR)) as u8,
            month: datetime.month() as u8,
            day: datetime.day() as u8,
            hour: datetime.hour() as u8,
            minute: datetime.minute() as u8,
            week: datetime.weekday().num_days_from_sunday() as u8,
        })
    }

    /// Converts this record into a `chrono` date-time. `week` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDate`] or [`DateError::InvalidTime`] when
    /// the fields do not describe a real Gregorian date and time, as with the
    /// BIOS "December 32" rendering.
    pub fn to_naive(&self) -> Result<NaiveDateTime, DateError> {
        let year = i32::from(self.full_year());
        let date = NaiveDate::from_ymd_opt(year, u32::from(self.month), u32::from(self.day))
            .ok_or(DateError::InvalidDate {
                year,
                month: self.month,
                day: self.day,
            })?;
        let time = NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0).ok_or(
            DateError::InvalidTime {
                hour: self.hour,
                minute: self.minute,
            },
        )?;
        Ok(NaiveDateTime::new(date, time))
    }
}
