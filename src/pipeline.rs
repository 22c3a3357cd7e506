//! The fetch → extract → render → persist pipeline.
//!
//! Packages are processed strictly sequentially. Each package's full
//! pipeline runs inside one scoped error boundary: a failure is diagnosed
//! with the package name and the run continues with the next package, so
//! one package can never abort its siblings. Outcomes are aggregated into
//! a [`RunSummary`] for the caller.

use crate::{
    config::Config,
    feed::PackageFeed,
    log,
    packages::load_packages,
    registry::{ExtractError, FetchError, RegistryClient, RegistryResponse, extract_latest},
    utils::date::DateTimeUtc,
};
use anyhow::Result;
use thiserror::Error;

/// Any failure within one package's pipeline.
#[derive(Debug, Error)]
pub enum PackageError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("failed to write feed: {0}")]
    Io(#[from] std::io::Error),
}

/// Aggregated per-package outcomes of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub updated: usize,
    pub failed: usize,
}

/// Run the full pipeline over the configured package list.
///
/// Fatal errors (unreadable package list, HTTP client construction) abort
/// the run; per-package failures do not.
pub fn run(config: &Config) -> Result<RunSummary> {
    let packages = load_packages(&config.packages_file)?;
    let client = RegistryClient::new()?;
    Ok(run_packages(&packages, |pkg| client.fetch(pkg), config))
}

/// Process each package in order, skipping past failures.
fn run_packages<F>(packages: &[String], mut fetch: F, config: &Config) -> RunSummary
where
    F: FnMut(&str) -> Result<RegistryResponse, FetchError>,
{
    let mut summary = RunSummary::default();

    for package in packages {
        match process_package(package, &mut fetch, config) {
            Ok(()) => summary.updated += 1,
            Err(e) => {
                log!("error"; "skipping {package}: {e}");
                summary.failed += 1;
            }
        }
    }

    summary
}

/// One package, start to finish.
fn process_package<F>(package: &str, fetch: &mut F, config: &Config) -> Result<(), PackageError>
where
    F: FnMut(&str) -> Result<RegistryResponse, FetchError>,
{
    let response = fetch(package)?;
    let latest = extract_latest(&response)?;
    let feed = PackageFeed::build(package, latest, DateTimeUtc::now());
    feed.write(&config.feeds_dir)?;
    Ok(())
}
