//! Calendar record to packed date (`BUP_SetDate`).

use tracing::trace;

use crate::packed::{DAYS_PER_LEAP_CYCLE, MINUTES_PER_DAY, NULL_DATE_SENTINEL, PackedDate};
use crate::record::BupDate;

/// Days elapsed before months 2..=12 of a common year.
const DAYS_BEFORE_MONTH: [u32; 11] = [31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Gregorian leap year test.
pub fn is_leap_year(year: u16) -> bool {
    if year % 4 != 0 {
        false
    } else if year % 100 != 0 {
        true
    } else {
        year % 400 == 0
    }
}

/// Compresses a calendar record into a packed date.
///
/// The all-zero record returns [`NULL_DATE_SENTINEL`]. `week` is ignored.
/// Out-of-range fields are not rejected; arithmetic wraps modulo 2^32.
///
/// The result matches the BIOS for every valid date up to 2199/12/31.
/// Month 0 (outside the null record) adds no month offset.
pub fn compress(record: &BupDate) -> PackedDate {
    if record.is_null() {
        trace!("null date record, returning BIOS sentinel");
        return NULL_DATE_SENTINEL;
    }

    let year_in_block = u32::from(record.year % 4);
    let mut days = u32::from(record.year / 4) * DAYS_PER_LEAP_CYCLE;
    if year_in_block != 0 {
        days += year_in_block * 365 + 1;
    }

    // The block arithmetic drifts from the BIOS around leap Februaries and
    // skipped century leap days. Both February corrections are independent.
    let full_year = record.full_year();
    days = days.wrapping_sub(1);
    if is_leap_year(full_year) && record.month == 2 {
        days = days.wrapping_sub(1);
    }
    if full_year > 2000 && full_year % 100 == 0 && record.month == 2 {
        days = days.wrapping_sub(1);
    }

    if (2..=12).contains(&record.month) {
        days = days.wrapping_add(DAYS_BEFORE_MONTH[usize::from(record.month) - 2]);
        if days > 2 && year_in_block == 0 {
            days = days.wrapping_add(1);
        }
    }

    let minutes = days
        .wrapping_add(u32::from(record.day))
        .wrapping_mul(MINUTES_PER_DAY)
        .wrapping_add(u32::from(record.hour) * 60)
        .wrapping_add(u32::from(record.minute));

    PackedDate::new(minutes)
}
