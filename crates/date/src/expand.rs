//! Packed date to calendar record (`BUP_GetDate`).

use crate::packed::{DAYS_PER_LEAP_CYCLE, MINUTES_PER_DAY, PackedDate, WEEKDAY_SHIFT_DAY};
use crate::record::BupDate;

/// Days per month with February at its common length.
const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Expands a packed date into its calendar record.
///
/// Total over `u32`: values past year offset 255 wrap in the byte fields.
///
/// Years are grouped in 1461-day blocks whose first year is the leap one, so
/// there is no century rule. The month walk covers at most 48 months.
///
/// # Examples
///
/// ```ignore
/// let date = expand(PackedDate::new(0));
/// assert_eq!((date.year, date.month, date.day), (0, 1, 1));
/// ```
pub fn expand(date: PackedDate) -> BupDate {
    let raw = date.get();
    let minute = (raw % 60) as u8;
    let hour = ((raw % MINUTES_PER_DAY) / 60) as u8;
    let day_count = raw / MINUTES_PER_DAY;

    let mut year = (day_count / DAYS_PER_LEAP_CYCLE) * 4;
    let mut days_remain = day_count % DAYS_PER_LEAP_CYCLE;
    let mut month: u8 = 0;

    for i in 0..48 {
        let mut days_in_month = u32::from(DAYS_IN_MONTH[i % 12]);
        // Leap day always sits in the first year of the block.
        if i == 1 {
            days_in_month += 1;
        }
        if days_remain < days_in_month {
            break;
        }
        days_remain -= days_in_month;
        month += 1;
        if i % 12 == 11 {
            month = 0;
            year += 1;
        }
    }

    BupDate {
        year: year as u8,
        month: month + 1,
        day: (days_remain + 1) as u8,
        hour,
        minute,
        week: weekday(day_count),
    }
}

/// Weekday (0 = Sunday) for a count of days since 1980/01/01.
pub(crate) fn weekday(day_count: u32) -> u8 {
    if day_count > WEEKDAY_SHIFT_DAY {
        ((day_count + 1) % 7) as u8
    } else {
        ((day_count + 2) % 7) as u8
    }
}
