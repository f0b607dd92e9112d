//! Backup directory entry (`BupDir`) nested in the header.

use bup_date::PackedDate;
use encoding_rs::SHIFT_JIS;

use crate::error::HeaderError;
use crate::language::Language;

/// Width of the filename field.
pub const FILENAME_LEN: usize = 12;

/// Width of the comment field.
pub const COMMENT_LEN: usize = 11;

/// Longest save name accepted when building a header (leaves room for NUL).
pub const MAX_FILENAME_CHARS: usize = FILENAME_LEN - 1;

/// Longest comment accepted when building a header (leaves room for NUL).
pub const MAX_COMMENT_CHARS: usize = COMMENT_LEN - 1;

/// Encoded size: 34 bytes of fields plus 2 bytes of padding.
pub const DIR_ENTRY_SIZE: usize = 36;

const COMMENT_OFFSET: usize = FILENAME_LEN;
const LANGUAGE_OFFSET: usize = COMMENT_OFFSET + COMMENT_LEN;
const DATE_OFFSET: usize = LANGUAGE_OFFSET + 1;
const DATA_SIZE_OFFSET: usize = DATE_OFFSET + 4;
const BLOCK_SIZE_OFFSET: usize = DATA_SIZE_OFFSET + 4;
const PADDING_OFFSET: usize = BLOCK_SIZE_OFFSET + 2;

/// Save metadata as the backup library's directory listing reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Save name, not necessarily NUL-terminated.
    pub filename: [u8; FILENAME_LEN],
    /// Comment, Shift-JIS encoded.
    pub comment: [u8; COMMENT_LEN],
    /// Raw language byte; see [`DirEntry::language`].
    pub language: u8,
    /// Date the save was written, as set by the game.
    pub date: PackedDate,
    /// Payload size in bytes.
    pub data_size: u32,
    /// Size in backup-memory blocks.
    pub block_size: u16,
    /// Trailing padding, kept verbatim.
    pub padding: u16,
}

impl Default for DirEntry {
    fn default() -> Self {
        Self {
            filename: [0; FILENAME_LEN],
            comment: [0; COMMENT_LEN],
            language: Language::Japanese.as_u8(),
            date: PackedDate::default(),
            data_size: 0,
            block_size: 0,
            padding: 0,
        }
    }
}

impl DirEntry {
    /// Decodes an entry from its 36-byte encoding.
    pub fn from_bytes(bytes: &[u8; DIR_ENTRY_SIZE]) -> Self {
        let mut filename = [0; FILENAME_LEN];
        filename.copy_from_slice(&bytes[..COMMENT_OFFSET]);
        let mut comment = [0; COMMENT_LEN];
        comment.copy_from_slice(&bytes[COMMENT_OFFSET..LANGUAGE_OFFSET]);
        Self {
            filename,
            comment,
            language: bytes[LANGUAGE_OFFSET],
            date: PackedDate::from_be_bytes(be_array(bytes, DATE_OFFSET)),
            data_size: u32::from_be_bytes(be_array(bytes, DATA_SIZE_OFFSET)),
            block_size: u16::from_be_bytes(be_array(bytes, BLOCK_SIZE_OFFSET)),
            padding: u16::from_be_bytes(be_array(bytes, PADDING_OFFSET)),
        }
    }

    /// Encodes the entry into its 36-byte form.
    pub fn to_bytes(&self) -> [u8; DIR_ENTRY_SIZE] {
        let mut out = [0; DIR_ENTRY_SIZE];
        out[..COMMENT_OFFSET].copy_from_slice(&self.filename);
        out[COMMENT_OFFSET..LANGUAGE_OFFSET].copy_from_slice(&self.comment);
        out[LANGUAGE_OFFSET] = self.language;
        out[DATE_OFFSET..DATA_SIZE_OFFSET].copy_from_slice(&self.date.to_be_bytes());
        out[DATA_SIZE_OFFSET..BLOCK_SIZE_OFFSET].copy_from_slice(&self.data_size.to_be_bytes());
        out[BLOCK_SIZE_OFFSET..PADDING_OFFSET].copy_from_slice(&self.block_size.to_be_bytes());
        out[PADDING_OFFSET..].copy_from_slice(&self.padding.to_be_bytes());
        out
    }

    /// Decoded language.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::UnknownLanguage`] for bytes above 5.
    pub fn language(&self) -> Result<Language, HeaderError> {
        Language::try_from(self.language)
    }

    /// Sets the filename, NUL-padding the field.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::NameTooLong`] if `name` exceeds 11 bytes.
    pub fn set_filename(&mut self, name: &str) -> Result<(), HeaderError> {
        self.filename = padded(name.as_bytes(), MAX_FILENAME_CHARS).ok_or(
            HeaderError::NameTooLong {
                len: name.len(),
                max: MAX_FILENAME_CHARS,
            },
        )?;
        Ok(())
    }

    /// Sets the comment as Shift-JIS, NUL-padding the field.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::CommentNotShiftJis`] if a character has no
    /// Shift-JIS encoding, or [`HeaderError::CommentTooLong`] if the encoded
    /// comment exceeds 10 bytes.
    pub fn set_comment(&mut self, comment: &str) -> Result<(), HeaderError> {
        let (encoded, _, unmappable) = SHIFT_JIS.encode(comment);
        if unmappable {
            return Err(HeaderError::CommentNotShiftJis {
                comment: comment.to_string(),
            });
        }
        self.comment = padded(&encoded, MAX_COMMENT_CHARS).ok_or(
            HeaderError::CommentTooLong {
                len: encoded.len(),
                max: MAX_COMMENT_CHARS,
            },
        )?;
        Ok(())
    }

    /// Filename up to the first NUL, lossily decoded as UTF-8.
    pub fn filename_str(&self) -> String {
        String::from_utf8_lossy(until_nul(&self.filename)).into_owned()
    }

    /// Comment up to the first NUL, decoded as Shift-JIS.
    pub fn comment_str(&self) -> String {
        SHIFT_JIS
            .decode_without_bom_handling(until_nul(&self.comment))
            .0
            .into_owned()
    }
}

fn be_array<const N: usize>(bytes: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0; N];
    out.copy_from_slice(&bytes[offset..offset + N]);
    out
}

fn padded<const N: usize>(src: &[u8], max: usize) -> Option<[u8; N]> {
    if src.len() > max {
        return None;
    }
    let mut out = [0; N];
    out[..src.len()].copy_from_slice(src);
    Some(out)
}

fn until_nul(field: &[u8]) -> &[u8] {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    &field[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_add_up() {
        assert_eq!(PADDING_OFFSET + 2, DIR_ENTRY_SIZE);
        assert_eq!(DATE_OFFSET, 24);
    }

    #[test]
    fn fields_are_big_endian() {
        let entry = DirEntry {
            date: PackedDate::new(0x0102_0304),
            data_size: 0x0A0B_0C0D,
            block_size: 0xBEEF,
            padding: 0x1234,
            ..DirEntry::default()
        };
        let bytes = entry.to_bytes();
        assert_eq!(&bytes[24..28], &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(&bytes[28..32], &[0x0A, 0x0B, 0x0C, 0x0D]);
        assert_eq!(&bytes[32..34], &[0xBE, 0xEF]);
        assert_eq!(&bytes[34..36], &[0x12, 0x34]);
        assert_eq!(DirEntry::from_bytes(&bytes), entry);
    }

    #[test]
    fn filename_fills_all_twelve_bytes_when_read() {
        let mut bytes = [0u8; DIR_ENTRY_SIZE];
        bytes[..12].copy_from_slice(b"ABCDEFGHIJKL");
        let entry = DirEntry::from_bytes(&bytes);
        assert_eq!(entry.filename_str(), "ABCDEFGHIJKL");
    }

    #[test]
    fn set_filename_limits() {
        let mut entry = DirEntry::default();
        entry.set_filename("GRANDIA_001").unwrap();
        assert_eq!(entry.filename_str(), "GRANDIA_001");
        assert_eq!(entry.filename[11], 0);
        assert_eq!(
            entry.set_filename("GRANDIA_0001").unwrap_err(),
            HeaderError::NameTooLong { len: 12, max: 11 }
        );
    }

    #[test]
    fn set_comment_limits() {
        let mut entry = DirEntry::default();
        entry.set_comment("SGC").unwrap();
        assert_eq!(entry.comment_str(), "SGC");
        assert_eq!(&entry.comment[3..], &[0; 8]);
        assert!(matches!(
            entry.set_comment("0123456789A"),
            Err(HeaderError::CommentTooLong { len: 11, max: 10 })
        ));
    }

    #[test]
    fn comment_decodes_shift_jis() {
        let mut bytes = [0u8; DIR_ENTRY_SIZE];
        // "セーブ"
        bytes[12..18].copy_from_slice(&[0x83, 0x5A, 0x81, 0x5B, 0x83, 0x75]);
        let entry = DirEntry::from_bytes(&bytes);
        assert_eq!(entry.comment_str(), "セーブ");
    }

    #[test]
    fn set_comment_encodes_shift_jis() {
        let mut entry = DirEntry::default();
        entry.set_comment("セーブ1").unwrap();
        assert_eq!(&entry.comment[..7], &[0x83, 0x5A, 0x81, 0x5B, 0x83, 0x75, b'1']);
        assert_eq!(entry.comment_str(), "セーブ1");

        // Six double-byte characters need 12 bytes.
        assert!(matches!(
            entry.set_comment("セーブデータ"),
            Err(HeaderError::CommentTooLong { len: 12, max: 10 })
        ));
        assert!(matches!(
            entry.set_comment("🎮"),
            Err(HeaderError::CommentNotShiftJis { .. })
        ));
    }

    #[test]
    fn unknown_language_byte() {
        let entry = DirEntry {
            language: 42,
            ..DirEntry::default()
        };
        assert!(matches!(
            entry.language(),
            Err(HeaderError::UnknownLanguage { value: 42 })
        ));
    }
}
