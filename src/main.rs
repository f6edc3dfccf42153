use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod services;

use crate::cli::Cli;
use crate::services::{interrupt, logging};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    logging::init(cli.verbose)?;

    let cancel = interrupt::install()?;
    commands::handle_run(&cli, &cancel)
}
