//! Reading `.BUP` images from disk.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use bup_header::{BUP_EXTENSION, BUP_HEADER_SIZE, BupHeader, validate};

/// True if `path` ends in `.BUP`. Pseudo Saturn Kai only loads the
/// uppercase extension, so case matters.
pub fn has_bup_extension(path: &Path) -> bool {
    path.to_str().is_some_and(|p| p.ends_with(BUP_EXTENSION))
}

/// Reads and validates a `.BUP` file, returning its header and payload.
pub fn read_bup(path: &Path) -> Result<(BupHeader, Vec<u8>)> {
    if !has_bup_extension(path) {
        bail!("{} must end with {BUP_EXTENSION}", path.display());
    }
    let mut bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    debug!(path = %path.display(), len = bytes.len(), "read bup file");

    let header = validate(&bytes).with_context(|| format!("invalid BUP file: {}", path.display()))?;
    let payload = bytes.split_off(BUP_HEADER_SIZE);
    Ok((header, payload))
}
