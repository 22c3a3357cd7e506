//! Command-line interface definitions.

use crate::config;
use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Generate per-package RSS feeds for app updates on F-Droid
///
/// Running with no arguments processes the full package list with the
/// built-in defaults.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Package list file (one package identifier per line)
    #[arg(short, long, default_value = config::PACKAGES_FILE, value_hint = clap::ValueHint::FilePath)]
    pub packages: PathBuf,

    /// Output directory for generated feed files
    #[arg(short, long, default_value = config::FEEDS_DIR, value_hint = clap::ValueHint::DirPath)]
    pub feeds_dir: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
