//! badge-import - Import badge images into an Xcode asset catalog.

mod catalog;
mod cli;
mod config;
mod core;
mod logger;
mod utils;

use anyhow::Result;
use clap::ColorChoice;
use cli::{Cli, import::BatchError};
use config::ImportConfig;

fn main() {
    let cli = Cli::parse_or_exit();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    if let Err(err) = run(&cli) {
        log!("error"; "{:#}", err);
        if let Some(batch) = err.downcast_ref::<BatchError>() {
            batch.print_hint();
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let config = ImportConfig::load(cli)?;
    cli::import::run_import(&config, cli.category, cli.force).map(|_| ())
}
