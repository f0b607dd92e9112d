//! # bup-date
//!
//! Packed date codec of the Saturn backup library (`BUP_GetDate` /
//! `BUP_SetDate`).
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["PackedDate (minutes since 1980)"] -->|"expand()"| B["BupDate"]
//!     B -->|"compress()"| A
//!     B -->|"apply_bios_year_end_quirk()"| C["BupDate (BIOS parity)"]
//!     B <-->|"from_naive() / to_naive()"| D["chrono::NaiveDateTime"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use bup_date::{BupDate, PackedDate, compress, expand};
//!
//! let date = expand(PackedDate::new(0x0008_0AEA));
//! assert_eq!(date.to_string(), "1981/01/01 00:42");
//!
//! let packed = compress(&BupDate::new(14, 11, 24, 0, 0));
//! assert_eq!(expand(packed).full_year(), 1994);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `packed` | `PackedDate` newtype and calibration constants |
//! | `record` | Expanded `BupDate` record |
//! | `expand` | Packed date to calendar record |
//! | `compress` | Calendar record to packed date |
//! | `quirk` | Opt-in reproduction of the BIOS "December 32" bug |
//! | `naive` | Conversions to and from `chrono` |
//! | `error` | Error types |

mod compress;
mod error;
mod expand;
mod naive;
mod packed;
mod quirk;
mod record;

pub use compress::{compress, is_leap_year};
pub use error::DateError;
pub use expand::expand;
pub use packed::{
    DAYS_PER_LEAP_CYCLE, EPOCH_YEAR, MAX_YEAR, MINUTES_PER_DAY, NULL_DATE_SENTINEL, PackedDate,
    WEEKDAY_SHIFT_DAY,
};
pub use quirk::{apply_bios_year_end_quirk, expand_bios_compatible};
pub use record::BupDate;
