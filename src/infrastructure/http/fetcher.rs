//! Blocking HTTP fetcher for the SPDX license list

use std::time::Duration;

use crate::domain::ports::{FetchError, LicenseFetcher};

const USER_AGENT: &str = concat!("license-lint/", env!("CARGO_PKG_VERSION"));

/// Plain GET over `reqwest::blocking`. No retries: a failed download ends the run.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    timeout: Option<Duration>,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self { timeout: None }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn client(&self) -> Result<reqwest::blocking::Client, FetchError> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().map_err(|e| FetchError(e.to_string()))
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let resp = self
            .client()?
            .get(url)
            .send()
            .map_err(|e| FetchError(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(FetchError(format!("HTTP status {}", resp.status())));
        }
        let bytes = resp.bytes().map_err(|e| FetchError(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
