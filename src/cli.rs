use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sega Saturn `.BUP` save backup tool.
#[derive(Parser)]
#[command(
    name = "bup",
    version,
    about = "Inspect, extract and create Sega Saturn .BUP save backups"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Validate a .BUP file and print its header.
    Inspect(InspectArgs),
    /// Write the raw save stored in a .BUP file.
    Extract(ExtractArgs),
    /// Wrap a raw save in a .BUP header.
    Create(CreateArgs),
    /// Convert between packed dates and calendar dates.
    Date(DateArgs),
}

/// Arguments for the `inspect` subcommand.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the .BUP file.
    pub input: PathBuf,
}

/// Arguments for the `extract` subcommand.
#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Path to the .BUP file.
    pub input: PathBuf,

    /// Output path (default: the save name, next to the input).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `create` subcommand.
#[derive(clap::Args)]
pub struct CreateArgs {
    /// Path to the raw save data.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Save name (at most 11 bytes).
    #[arg(short, long)]
    pub name: String,

    /// Save comment (at most 10 bytes). Overrides the config file.
    #[arg(long)]
    pub comment: Option<String>,

    /// Save language, e.g. English or Deutsch. Overrides the config file.
    #[arg(short, long)]
    pub language: Option<String>,

    /// Save date as YYYY-MM-DD or YYYY-MM-DDTHH:MM. Overrides the config file.
    #[arg(short, long)]
    pub date: Option<String>,

    /// Path to a TOML file with `[create]` defaults.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output path (default: NAME.BUP next to the input).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `date` subcommand.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Conversion to perform.
    #[command(subcommand)]
    pub command: DateCommand,
}

/// Date conversions.
#[derive(Subcommand)]
pub enum DateCommand {
    /// Expand a packed date (decimal, or hex with 0x prefix).
    Expand {
        /// Packed date value.
        value: String,

        /// Render January 1st after a leap year as the BIOS does (Dec 32).
        #[arg(long)]
        bios: bool,
    },
    /// Compress a calendar date into a packed date.
    Compress {
        /// Date as YYYY-MM-DD or YYYY-MM-DDTHH:MM.
        #[arg(required_unless_present = "null")]
        date: Option<String>,

        /// Compress the all-zero record instead.
        #[arg(long, conflicts_with = "date")]
        null: bool,
    },
}
