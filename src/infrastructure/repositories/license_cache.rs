//! SPDX license list repository
//!
//! Reads the license list from a local cache file, downloading it once when
//! the cache is absent. An existing cache is never refreshed, even if it is
//! stale or malformed.

use std::path::PathBuf;

use crate::domain::entities::{LicenseList, ReferenceLicenseSet};
use crate::domain::ports::{FileSystem, FsError, LicenseFetcher};
use crate::error::{LintError, LintResult};

/// Cache-backed loader for the SPDX license list
pub struct SpdxLicenseRepository<F, H> {
    fs: F,
    fetcher: H,
    cache_path: PathBuf,
    source_url: String,
}

impl<F: FileSystem, H: LicenseFetcher> SpdxLicenseRepository<F, H> {
    pub fn new(
        fs: F,
        fetcher: H,
        cache_path: impl Into<PathBuf>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            fs,
            fetcher,
            cache_path: cache_path.into(),
            source_url: source_url.into(),
        }
    }

    /// Download the list into the cache if it is not there yet.
    ///
    /// Returns `true` when a download happened. On failure any partial
    /// cache file is removed before the error is returned.
    pub fn ensure_cached(&self) -> LintResult<bool> {
        let cached = self
            .fs
            .exists(&self.cache_path)
            .map_err(|e| LintError::io(&self.cache_path, e.into_io()))?;
        if cached {
            tracing::debug!(cache = %self.cache_path.display(), "license list cache hit");
            return Ok(false);
        }

        tracing::info!(
            cache = %self.cache_path.display(),
            url = %self.source_url,
            "no license list cache found, fetching"
        );

        let body = match self.fetcher.fetch(&self.source_url) {
            Ok(body) => body,
            Err(e) => {
                self.discard_partial();
                return Err(LintError::Fetch {
                    url: self.source_url.clone(),
                    message: e.to_string(),
                });
            }
        };

        if let Err(e) = self.fs.write(&self.cache_path, &body) {
            self.discard_partial();
            return Err(LintError::io(&self.cache_path, e.into_io()));
        }

        tracing::info!(
            cache = %self.cache_path.display(),
            bytes = body.len(),
            "license list cached"
        );
        Ok(true)
    }

    /// Read and decode the cached license list, fetching it first on a miss
    pub fn load_list(&self) -> LintResult<LicenseList> {
        self.ensure_cached()?;

        let content = self
            .fs
            .read(&self.cache_path)
            .map_err(|e| LintError::io(&self.cache_path, e.into_io()))?;

        serde_json::from_str(&content).map_err(|source| LintError::InvalidLicenseList {
            path: self.cache_path.clone(),
            source,
        })
    }

    /// Load the set of non-deprecated identifiers
    pub fn load_reference_set(&self) -> LintResult<ReferenceLicenseSet> {
        let list = self.load_list()?;
        let set = list.reference_set();
        if set.is_empty() {
            tracing::warn!(
                cache = %self.cache_path.display(),
                "license list has no current identifiers; every declared license will be reported"
            );
        }
        tracing::info!(
            version = %list.license_list_version,
            records = list.licenses.len(),
            valid = set.len(),
            "loaded SPDX license list"
        );
        Ok(set)
    }

    fn discard_partial(&self) {
        match self.fs.remove(&self.cache_path) {
            Ok(()) | Err(FsError::NotFound(_)) => {}
            Err(e) => tracing::warn!(
                cache = %self.cache_path.display(),
                error = %e,
                "failed to remove partial cache file"
            ),
        }
    }
}
