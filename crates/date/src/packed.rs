//! Packed date newtype and the constants shared by the codec.

use std::fmt;

use crate::expand::expand;
use crate::record::BupDate;

/// First calendar year representable by a [`BupDate`] (year offset 0).
pub const EPOCH_YEAR: u16 = 1980;

/// Last calendar year representable by a [`BupDate`] (year offset 255).
pub const MAX_YEAR: u16 = EPOCH_YEAR + u8::MAX as u16;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 60 * 24;

/// Days in a four-year block holding exactly one leap day.
pub const DAYS_PER_LEAP_CYCLE: u32 = 365 * 4 + 1;

/// Value returned by [`compress`](crate::compress) for an all-zero record.
///
/// Matches the Saturn BIOS, which yields 1996/03/26 00:00 for the null input.
/// Existing saves depend on this exact value.
pub const NULL_DATE_SENTINEL: PackedDate = PackedDate(0x0082_46A0);

/// Day count after which the weekday formula switches offset.
///
/// Calibrated against the BIOS epoch; it lands on the missing 2100/02/29.
pub const WEEKDAY_SHIFT_DAY: u32 = 0xAB71;

/// Date stamp in the backup library's compressed form: minutes elapsed since
/// 1980/01/01 00:00.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackedDate(u32);

impl PackedDate {
    /// Wraps a raw packed value. Every `u32` is accepted.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw packed value.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Expands this value into a calendar record. See [`expand`].
    pub fn expand(self) -> BupDate {
        expand(self)
    }

    /// Big-endian bytes, as stored in `.BUP` headers.
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Reads a value stored big-endian.
    pub const fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }
}

impl From<u32> for PackedDate {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<PackedDate> for u32 {
    fn from(date: PackedDate) -> Self {
        date.0
    }
}

impl fmt::LowerHex for PackedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for PackedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_year_is_offset_255() {
        assert_eq!(MAX_YEAR, 2235);
    }

    #[test]
    fn be_bytes_are_most_significant_first() {
        let date = PackedDate::new(0x0082_46A0);
        assert_eq!(date.to_be_bytes(), [0x00, 0x82, 0x46, 0xA0]);
        assert_eq!(PackedDate::from_be_bytes([0x00, 0x82, 0x46, 0xA0]), date);
    }

    #[test]
    fn u32_conversions() {
        let date: PackedDate = 42u32.into();
        assert_eq!(date.get(), 42);
        assert_eq!(u32::from(date), 42);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(format!("{:08X}", NULL_DATE_SENTINEL), "008246A0");
        assert_eq!(format!("{:#x}", PackedDate::new(0x80AEA)), "0x80aea");
    }
}
