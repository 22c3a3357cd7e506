//! Blocking HTTP client for registry lookups.

use super::types::RegistryResponse;
use crate::{config, debug};
use anyhow::{Context, Result};
use thiserror::Error;

/// Network, status or decode failure for one registry lookup.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("registry returned {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed registry response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Registry metadata client.
///
/// Issues one synchronous `GET {REGISTRY_API_BASE}/{packageId}` per lookup
/// with a fixed timeout. No retry, no rate limiting, no authentication.
pub struct RegistryClient {
    http: reqwest::blocking::Client,
}

impl RegistryClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config::FETCH_TIMEOUT)
            .build()
            .context("failed to construct HTTP client")?;
        Ok(Self { http })
    }

    /// Fetch the registry metadata for one package.
    pub fn fetch(&self, package: &str) -> Result<RegistryResponse, FetchError> {
        let url = format!("{}/{package}", config::REGISTRY_API_BASE);
        debug!("fetch"; "GET {url}");

        let response = self.http.get(&url).send().map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        response.json().map_err(FetchError::Decode)
    }
}
