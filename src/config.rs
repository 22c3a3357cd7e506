//! Fixed configuration for the feed generator.
//!
//! All registry URLs and default paths are compile-time constants; the CLI
//! only overrides the two filesystem paths. No config file and no
//! environment variables are consulted.

use crate::cli::Cli;
use std::{path::PathBuf, time::Duration};

/// Default package list file (one package identifier per line).
pub const PACKAGES_FILE: &str = "packages.txt";

/// Default output directory for generated feeds.
pub const FEEDS_DIR: &str = "feeds";

/// F-Droid package metadata API (`{base}/{packageId}`).
pub const REGISTRY_API_BASE: &str = "https://f-droid.org/api/v1/packages";

/// F-Droid package page (`{base}/{packageId}/`).
pub const PACKAGE_PAGE_BASE: &str = "https://f-droid.org/packages";

/// F-Droid static artifact host (`{base}/{packageId}_{versionCode}.apk`).
pub const REPO_BASE: &str = "https://f-droid.org/repo";

/// Per-request timeout for registry lookups.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolved run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Package list file path.
    pub packages_file: PathBuf,
    /// Output directory for per-package feed files.
    pub feeds_dir: PathBuf,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            packages_file: cli.packages.clone(),
            feeds_dir: cli.feeds_dir.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            packages_file: PathBuf::from(PACKAGES_FILE),
            feeds_dir: PathBuf::from(FEEDS_DIR),
        }
    }
}
