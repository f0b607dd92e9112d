//! The 64-byte `.BUP` header.

use bup_date::PackedDate;
use tracing::debug;

use crate::dir::{DIR_ENTRY_SIZE, DirEntry};
use crate::error::HeaderError;
use crate::language::Language;
use crate::stats::{STATS_BLOCK_SIZE, UsageStats};

/// Size of the encoded header.
pub const BUP_HEADER_SIZE: usize = 64;

/// Magic tag at offset 0.
pub const VMEM_MAGIC: [u8; 4] = *b"Vmem";

/// File extension save tools require.
pub const BUP_EXTENSION: &str = ".BUP";

const SAVE_ID_OFFSET: usize = 4;
const STATS_OFFSET: usize = 8;
const RESERVED1_OFFSET: usize = STATS_OFFSET + UsageStats::SIZE;
const DIR_OFFSET: usize = STATS_OFFSET + STATS_BLOCK_SIZE;
const DATE_OFFSET: usize = DIR_OFFSET + DIR_ENTRY_SIZE;
const RESERVED2_OFFSET: usize = DATE_OFFSET + 4;

const _: () = assert!(RESERVED2_OFFSET + 8 == BUP_HEADER_SIZE);

/// Vmem backup data header. Multi-byte values are big-endian on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BupHeader {
    /// Magic tag, `"Vmem"` in valid files.
    pub magic: [u8; 4],
    /// Save identifier; higher is more recent.
    pub save_id: u32,
    /// Session usage statistics.
    pub stats: UsageStats,
    /// Reserved bytes after the statistics, kept verbatim.
    pub reserved1: [u8; STATS_BLOCK_SIZE - UsageStats::SIZE],
    /// Directory entry describing the save.
    pub dir: DirEntry,
    /// Date the vmem session last started.
    ///
    /// Used to pick the newest save when rebuilding the index. Games often
    /// leave `dir.date` at zero, but when set it is the more accurate stamp.
    pub date: PackedDate,
    /// Trailing reserved bytes, kept verbatim.
    pub reserved2: [u8; 8],
}

impl Default for BupHeader {
    fn default() -> Self {
        Self {
            magic: VMEM_MAGIC,
            save_id: 0,
            stats: UsageStats::default(),
            reserved1: [0; STATS_BLOCK_SIZE - UsageStats::SIZE],
            dir: DirEntry::default(),
            date: PackedDate::default(),
            reserved2: [0; 8],
        }
    }
}

impl BupHeader {
    /// Builds the header for a fresh save: zeroed statistics, and the same
    /// date in both the directory entry and the session stamp.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::NameTooLong`], [`HeaderError::CommentTooLong`]
    /// or [`HeaderError::DataTooLarge`].
    pub fn new_save(
        name: &str,
        comment: &str,
        language: Language,
        date: PackedDate,
        data_len: usize,
    ) -> Result<Self, HeaderError> {
        let data_size =
            u32::try_from(data_len).map_err(|_| HeaderError::DataTooLarge { len: data_len })?;
        let mut dir = DirEntry {
            language: language.as_u8(),
            date,
            data_size,
            ..DirEntry::default()
        };
        dir.set_filename(name)?;
        dir.set_comment(comment)?;
        Ok(Self {
            dir,
            date,
            ..Self::default()
        })
    }

    /// Decodes the header from the first 64 bytes of `bytes`.
    ///
    /// The magic tag is not checked here; see [`validate`](crate::validate).
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::MalformedHeader`] if `bytes` is shorter than 64.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HeaderError> {
        let bytes: &[u8; BUP_HEADER_SIZE] = bytes
            .get(..BUP_HEADER_SIZE)
            .and_then(|b| b.try_into().ok())
            .ok_or(HeaderError::MalformedHeader { len: bytes.len() })?;

        let header = Self {
            magic: array(bytes, 0),
            save_id: u32::from_be_bytes(array(bytes, SAVE_ID_OFFSET)),
            stats: UsageStats::from_bytes(array(bytes, STATS_OFFSET)),
            reserved1: array(bytes, RESERVED1_OFFSET),
            dir: DirEntry::from_bytes(&array(bytes, DIR_OFFSET)),
            date: PackedDate::from_be_bytes(array(bytes, DATE_OFFSET)),
            reserved2: array(bytes, RESERVED2_OFFSET),
        };
        debug!(
            save_id = header.save_id,
            data_size = header.dir.data_size,
            "decoded bup header"
        );
        Ok(header)
    }

    /// Encodes the header.
    pub fn to_bytes(&self) -> [u8; BUP_HEADER_SIZE] {
        let mut out = [0; BUP_HEADER_SIZE];
        out[..SAVE_ID_OFFSET].copy_from_slice(&self.magic);
        out[SAVE_ID_OFFSET..STATS_OFFSET].copy_from_slice(&self.save_id.to_be_bytes());
        out[STATS_OFFSET..RESERVED1_OFFSET].copy_from_slice(&self.stats.to_bytes());
        out[RESERVED1_OFFSET..DIR_OFFSET].copy_from_slice(&self.reserved1);
        out[DIR_OFFSET..DATE_OFFSET].copy_from_slice(&self.dir.to_bytes());
        out[DATE_OFFSET..RESERVED2_OFFSET].copy_from_slice(&self.date.to_be_bytes());
        out[RESERVED2_OFFSET..].copy_from_slice(&self.reserved2);
        out
    }

    /// Encodes the header into the start of `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::MalformedHeader`] if `buf` is shorter than 64.
    pub fn write_to(&self, buf: &mut [u8]) -> Result<(), HeaderError> {
        let len = buf.len();
        let dst = buf
            .get_mut(..BUP_HEADER_SIZE)
            .ok_or(HeaderError::MalformedHeader { len })?;
        dst.copy_from_slice(&self.to_bytes());
        Ok(())
    }

    /// True if the magic tag is `"Vmem"`.
    pub fn has_valid_magic(&self) -> bool {
        self.magic == VMEM_MAGIC
    }
}

fn array<const N: usize>(bytes: &[u8; BUP_HEADER_SIZE], offset: usize) -> [u8; N] {
    let mut out = [0; N];
    out.copy_from_slice(&bytes[offset..offset + N]);
    out
}
