//! Vmem usage statistics.

/// Bytes reserved for the statistics block, counters plus padding.
pub const STATS_BLOCK_SIZE: usize = 8;

/// Per-session call counters kept by the vmem backup emulation.
///
/// Reset whenever the Saturn is reset or a game calls `BUP_Init`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageStats {
    /// `BUP_Dir` calls.
    pub dir_count: u8,
    /// `BUP_Read` calls.
    pub read_count: u8,
    /// `BUP_Write` calls.
    pub write_count: u8,
    /// `BUP_Verify` calls.
    pub verify_count: u8,
}

impl UsageStats {
    /// Encoded size of the counters.
    pub const SIZE: usize = 4;

    pub(crate) fn from_bytes(bytes: [u8; Self::SIZE]) -> Self {
        Self {
            dir_count: bytes[0],
            read_count: bytes[1],
            write_count: bytes[2],
            verify_count: bytes[3],
        }
    }

    pub(crate) fn to_bytes(self) -> [u8; Self::SIZE] {
        [
            self.dir_count,
            self.read_count,
            self.write_count,
            self.verify_count,
        ]
    }
}
