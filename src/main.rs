//! fdroid-rss - per-package RSS feeds for app updates on F-Droid.

mod cli;
mod config;
mod feed;
mod logger;
mod packages;
mod pipeline;
mod registry;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = Config::from_cli(&cli);
    let summary = pipeline::run(&config)?;

    // Per-package failures are already diagnosed; the exit status does not
    // distinguish a partially failed run from a clean one.
    log!("run"; "updated {} feed{}, {} failure{}",
        summary.updated, if summary.updated == 1 { "" } else { "s" },
        summary.failed, if summary.failed == 1 { "" } else { "s" });

    Ok(())
}
