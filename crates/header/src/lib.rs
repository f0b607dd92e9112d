//! # bup-header
//!
//! The 64-byte `Vmem` header prepended to Sega Saturn `.BUP` save backups.
//! All multi-byte fields are big-endian and every field is read and written
//! at an explicit offset.
//!
//! ## Layout
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 4 | magic `"Vmem"` |
//! | 4 | 4 | save id |
//! | 8 | 4 | usage statistics |
//! | 12 | 4 | reserved |
//! | 16 | 12 | dir: filename |
//! | 28 | 11 | dir: comment |
//! | 39 | 1 | dir: language |
//! | 40 | 4 | dir: packed date |
//! | 44 | 4 | dir: data size |
//! | 48 | 2 | dir: block size |
//! | 50 | 2 | dir: padding |
//! | 52 | 4 | last session packed date |
//! | 56 | 8 | reserved |
//!
//! ## Quick Start
//!
//! ```ignore
//! use bup_header::{BupHeader, validate};
//!
//! let bytes = std::fs::read("SAVE.BUP")?;
//! let header = validate(&bytes)?;
//! println!("{} written {}", header.dir.filename_str(), header.dir.date.expand());
//! ```

mod dir;
mod error;
mod header;
mod language;
mod stats;
mod validate;

pub use dir::{
    COMMENT_LEN, DIR_ENTRY_SIZE, DirEntry, FILENAME_LEN, MAX_COMMENT_CHARS, MAX_FILENAME_CHARS,
};
pub use error::HeaderError;
pub use header::{BUP_EXTENSION, BUP_HEADER_SIZE, BupHeader, VMEM_MAGIC};
pub use language::Language;
pub use stats::{STATS_BLOCK_SIZE, UsageStats};
pub use validate::validate;
