//! File-level sanity checks for `.BUP` images.

use tracing::debug;

use crate::error::HeaderError;
use crate::header::{BUP_HEADER_SIZE, BupHeader};

/// Decodes and checks the header of a complete `.BUP` image.
///
/// Checks, in order: at least 64 bytes, `"Vmem"` magic, a known language,
/// and a directory data size equal to the payload length after the header.
/// Dates are not checked.
///
/// # Errors
///
/// Returns the [`HeaderError`] of the first failing check.
pub fn validate(bytes: &[u8]) -> Result<BupHeader, HeaderError> {
    let header = BupHeader::from_bytes(bytes)?;
    if !header.has_valid_magic() {
        return Err(HeaderError::InvalidMagic {
            found: header.magic,
        });
    }
    header.dir.language()?;

    let payload_len = bytes.len() - BUP_HEADER_SIZE;
    if usize::try_from(header.dir.data_size).ok() != Some(payload_len) {
        return Err(HeaderError::DataSizeMismatch {
            expected: header.dir.data_size,
            got: payload_len,
        });
    }
    debug!(payload_len, "bup image validated");
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use bup_date::PackedDate;

    fn image(payload: &[u8]) -> Vec<u8> {
        let header = BupHeader::new_save(
            "TEST",
            "",
            Language::Japanese,
            PackedDate::default(),
            payload.len(),
        )
        .unwrap();
        let mut out = header.to_bytes().to_vec();
        out.extend_from_slice(payload);
        out
    }

    #[test]
    fn accepts_header_only_image() {
        assert!(validate(&image(&[])).is_ok());
    }

    #[test]
    fn rejects_truncated_payload() {
        let mut bytes = image(&[1, 2, 3, 4]);
        bytes.pop();
        assert_eq!(
            validate(&bytes).unwrap_err(),
            HeaderError::DataSizeMismatch {
                expected: 4,
                got: 3,
            }
        );
    }

    #[test]
    fn magic_checked_before_language() {
        let mut bytes = image(&[]);
        bytes[0] = b'v';
        bytes[39] = 77;
        assert!(matches!(
            validate(&bytes),
            Err(HeaderError::InvalidMagic { .. })
        ));
    }
}
