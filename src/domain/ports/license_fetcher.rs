//! LicenseFetcher port - downloads the SPDX license list
//!
//! Only consulted on a cache miss. Implementations return the raw body;
//! the repository writes it to disk verbatim.

use std::fmt;

/// Download failure, kept as a message since the run ends here anyway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError(pub String);

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for FetchError {}

/// Source of the SPDX license list document
pub trait LicenseFetcher {
    /// GET `url` and return the response body
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
