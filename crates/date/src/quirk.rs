//! Opt-in reproduction of the Saturn BIOS "December 32" bug.
//!
//! The BIOS renders January 1st of the year following a leap year as
//! December 32nd of the leap year, e.g. `00080AEA` reads back as
//! `1980/12/32 00:42` instead of `1981/01/01 00:42`. [`expand`] returns the
//! correct date; these functions exist for callers that need byte-for-byte
//! parity with BIOS output.

use crate::expand::expand;
use crate::packed::PackedDate;
use crate::record::BupDate;

/// Rewrites a correctly expanded record the way the BIOS would display it.
///
/// Only January 1st of a year with `year % 4 == 1` is affected.
pub fn apply_bios_year_end_quirk(record: BupDate) -> BupDate {
    if record.month == 1 && record.day == 1 && record.year % 4 == 1 {
        BupDate {
            year: record.year - 1,
            month: 12,
            day: 32,
            ..record
        }
    } else {
        record
    }
}

/// [`expand`] followed by [`apply_bios_year_end_quirk`].
pub fn expand_bios_compatible(date: PackedDate) -> BupDate {
    apply_bios_year_end_quirk(expand(date))
}
