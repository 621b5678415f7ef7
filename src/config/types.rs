//! Configuration types

use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_PACKAGES_DIR: &str = "packages";
pub const DEFAULT_MANIFEST_NAME: &str = "package.yml";
pub const DEFAULT_CACHE_PATH: &str = "common/licenses.json";
pub const DEFAULT_SOURCE_URL: &str = "https://spdx.org/licenses/licenses.json";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory walked for manifests
    pub packages_dir: PathBuf,

    /// File name that marks a package manifest
    pub manifest_name: String,

    /// Local copy of the SPDX license list
    pub cache_path: PathBuf,

    /// Where the license list is downloaded from on a cache miss
    pub source_url: String,

    /// Exit non-zero when any finding is reported
    pub strict: bool,

    /// Report manifests that declare no license
    pub require_license: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            packages_dir: PathBuf::from(DEFAULT_PACKAGES_DIR),
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            source_url: DEFAULT_SOURCE_URL.to_string(),
            strict: false,
            require_license: false,
        }
    }
}
