//! Date command: packed date conversions.

use anyhow::Result;

use bup_date::{BupDate, PackedDate, compress, expand, expand_bios_compatible};

use crate::cli::{DateArgs, DateCommand};
use crate::convert;

/// Run the date command.
pub fn run(args: DateArgs) -> Result<()> {
    println!("{}", render(args.command)?);
    Ok(())
}

fn render(command: DateCommand) -> Result<String> {
    match command {
        DateCommand::Expand { value, bios } => {
            let packed = convert::parse_packed(&value)?;
            let date = if bios {
                expand_bios_compatible(packed)
            } else {
                expand(packed)
            };
            Ok(format!("{date} (week {})", date.week))
        }
        DateCommand::Compress { date, null } => {
            let packed = match date {
                Some(date) if !null => convert::packed_from_str(&date)?,
                _ => compress(&BupDate::default()),
            };
            Ok(format_packed(packed))
        }
    }
}

fn format_packed(date: PackedDate) -> String {
    format!("0x{date:08X}")
}
