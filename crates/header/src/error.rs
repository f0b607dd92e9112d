//! Error types for bup-header.

/// Error type for all fallible operations in the bup-header crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HeaderError {
    /// Returned when fewer than 64 bytes are available for a header.
    #[error("malformed header: need 64 bytes, got {len}")]
    MalformedHeader {
        /// Number of bytes supplied.
        len: usize,
    },

    /// Returned when the magic tag is not `"Vmem"`.
    #[error("invalid magic: expected \"Vmem\", found {found:02X?}")]
    InvalidMagic {
        /// The four bytes found at offset 0.
        found: [u8; 4],
    },

    /// Returned when the language byte is not a known language.
    #[error("unknown language: {value}")]
    UnknownLanguage {
        /// The raw language byte.
        value: u8,
    },

    /// Returned when a language name cannot be parsed.
    #[error("unknown language name: {name:?}")]
    UnknownLanguageName {
        /// The name that was provided.
        name: String,
    },

    /// Returned when a save name does not fit the filename field.
    #[error("save name is {len} bytes (max {max})")]
    NameTooLong {
        /// Length of the supplied name in bytes.
        len: usize,
        /// Maximum accepted length.
        max: usize,
    },

    /// Returned when a comment does not fit the comment field.
    #[error("comment is {len} bytes (max {max})")]
    CommentTooLong {
        /// Length of the supplied comment in bytes.
        len: usize,
        /// Maximum accepted length.
        max: usize,
    },

    /// Returned when a comment contains characters Shift-JIS cannot encode.
    #[error("comment {comment:?} cannot be encoded as Shift-JIS")]
    CommentNotShiftJis {
        /// The comment that was provided.
        comment: String,
    },

    /// Returned when the recorded data size disagrees with the payload.
    #[error("data size mismatch: header says {expected}, payload is {got}")]
    DataSizeMismatch {
        /// Size recorded in the directory entry.
        expected: u32,
        /// Actual payload length.
        got: usize,
    },

    /// Returned when a payload is too large for the 32-bit size field.
    #[error("payload of {len} bytes does not fit a 32-bit size")]
    DataTooLarge {
        /// Payload length.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_malformed_header() {
        let err = HeaderError::MalformedHeader { len: 12 };
        assert_eq!(err.to_string(), "malformed header: need 64 bytes, got 12");
    }

    #[test]
    fn display_invalid_magic() {
        let err = HeaderError::InvalidMagic {
            found: *b"VMEM",
        };
        assert_eq!(
            err.to_string(),
            "invalid magic: expected \"Vmem\", found [56, 4D, 45, 4D]"
        );
    }

    #[test]
    fn display_unknown_language() {
        let err = HeaderError::UnknownLanguage { value: 9 };
        assert_eq!(err.to_string(), "unknown language: 9");
    }

    #[test]
    fn display_unknown_language_name() {
        let err = HeaderError::UnknownLanguageName {
            name: "klingon".to_string(),
        };
        assert_eq!(err.to_string(), "unknown language name: \"klingon\"");
    }

    #[test]
    fn display_too_long() {
        let err = HeaderError::NameTooLong { len: 14, max: 11 };
        assert_eq!(err.to_string(), "save name is 14 bytes (max 11)");
        let err = HeaderError::CommentTooLong { len: 12, max: 10 };
        assert_eq!(err.to_string(), "comment is 12 bytes (max 10)");
    }

    #[test]
    fn display_comment_not_shift_jis() {
        let err = HeaderError::CommentNotShiftJis {
            comment: "é".to_string(),
        };
        assert_eq!(err.to_string(), "comment \"é\" cannot be encoded as Shift-JIS");
    }

    #[test]
    fn display_data_size_mismatch() {
        let err = HeaderError::DataSizeMismatch {
            expected: 8192,
            got: 8000,
        };
        assert_eq!(
            err.to_string(),
            "data size mismatch: header says 8192, payload is 8000"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<HeaderError>();
    }
}
