//! Remote asset fetching.

use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::error::BallastError;

/// Fetch timeout so an unresponsive remote host cannot stall a build
/// indefinitely.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking URL fetch capability.
pub trait RemoteFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Production fetcher backed by a blocking reqwest client.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, BallastError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(HttpFetcher { client })
    }
}

impl RemoteFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("fetching remote asset {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("failed to download {}", url))?;

        if !response.status().is_success() {
            bail!("failed to download {}: HTTP {}", url, response.status());
        }

        let bytes = response
            .bytes()
            .with_context(|| format!("failed to read response body from {}", url))?;

        Ok(bytes.to_vec())
    }
}
