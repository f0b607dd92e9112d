//! Extract command: write the raw save stored after the header.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use crate::bup_file::read_bup;
use crate::cli::ExtractArgs;

/// Run the extract command.
pub fn run(args: ExtractArgs) -> Result<()> {
    let _cmd = info_span!("extract").entered();
    let (header, payload) = read_bup(&args.input)?;

    let output = match args.output {
        Some(path) => path,
        None => default_output(&args.input, &header.dir.filename_str())?,
    };
    std::fs::write(&output, &payload)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(path = %output.display(), len = payload.len(), "raw save extracted");
    println!("Extracted {} ({} bytes)", output.display(), payload.len());
    Ok(())
}

/// The save name, placed next to the input file.
fn default_output(input: &std::path::Path, save_name: &str) -> Result<PathBuf> {
    if save_name.is_empty()
        || save_name.contains(['/', '\\'])
        || save_name == "."
        || save_name == ".."
    {
        bail!("save name {save_name:?} cannot be used as a file name; pass --output");
    }
    Ok(input.with_file_name(save_name))
}
