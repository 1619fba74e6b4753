mod cli;
mod holidays_cmd;
mod logging;
mod render;
mod schedule_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::Holidays(args)) => holidays_cmd::run(args, cli.format),
        None => schedule_cmd::run(cli.fur.as_deref(), cli.format),
    }
}
