mod bup_file;
mod cli;
mod config;
mod convert;
mod create_cmd;
mod date_cmd;
mod extract_cmd;
mod inspect_cmd;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Inspect(args) => inspect_cmd::run(args),
        Command::Extract(args) => extract_cmd::run(args),
        Command::Create(args) => create_cmd::run(args),
        Command::Date(args) => date_cmd::run(args),
    }
}
