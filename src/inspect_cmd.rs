//! Inspect command: validate a `.BUP` file and print its header.

use anyhow::Result;
use tracing::{info, info_span};

use bup_date::PackedDate;
use bup_header::{BupHeader, HeaderError};

use crate::bup_file::read_bup;
use crate::cli::InspectArgs;

/// Run the inspect command.
pub fn run(args: InspectArgs) -> Result<()> {
    let _cmd = info_span!("inspect").entered();
    info!(path = %args.input.display(), "validating");
    let (header, _payload) = read_bup(&args.input)?;
    for line in report(&header)? {
        println!("{line}");
    }
    println!("Valid .BUP file");
    Ok(())
}

/// Human-readable description of a header.
pub fn report(header: &BupHeader) -> Result<Vec<String>, HeaderError> {
    let language = header.dir.language()?;
    Ok(vec![
        format!("Save name:    {}", header.dir.filename_str()),
        format!("Comment:      {}", header.dir.comment_str()),
        format!("Language:     {language}"),
        format!("Date:         {}", describe_date(header.dir.date)),
        format!("Session date: {}", describe_date(header.date)),
        format!("Data size:    {}", header.dir.data_size),
        format!("Block size:   {}", header.dir.block_size),
        format!("Save id:      {}", header.save_id),
        format!(
            "Stats:        dir {} / read {} / write {} / verify {}",
            header.stats.dir_count,
            header.stats.read_count,
            header.stats.write_count,
            header.stats.verify_count
        ),
    ])
}

fn describe_date(date: PackedDate) -> String {
    format!("{} (0x{date:08X})", date.expand())
}
