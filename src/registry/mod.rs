//! F-Droid package registry access.
//!
//! One metadata lookup per package identifier against the registry's
//! HTTP API, plus selection of the latest version from the response:
//!
//! - **client**: blocking HTTP lookups with a bounded timeout
//! - **types**: response shapes and positional latest-version extraction

mod client;
mod types;

pub use client::{FetchError, RegistryClient};
pub use types::{ExtractError, LatestVersion, RegistryResponse, VersionRecord, extract_latest};
