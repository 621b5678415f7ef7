//! Error types for license-lint
//!
//! Library code returns `LintError`; the binary wraps it in `anyhow`.
//! Every variant is fatal: a run either finishes its pass or stops at the
//! first error. Invalid license identifiers are findings, not errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for license-lint operations
pub type LintResult<T> = Result<T, LintError>;

/// Main error type for license-lint operations
#[derive(Error, Debug)]
pub enum LintError {
    /// File could not be read or written
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The SPDX license list could not be downloaded
    #[error("failed to fetch license list from {url}: {message}")]
    Fetch { url: String, message: String },

    /// The cached license list is not valid SPDX JSON
    #[error("invalid license list in {path}: {source}")]
    InvalidLicenseList {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Manifest matched neither the scalar nor the list license shape
    #[error("invalid manifest {path}: {message}")]
    InvalidManifest { path: PathBuf, message: String },

    /// Directory traversal failed
    #[error("failed to walk {root}: {message}")]
    Walk { root: PathBuf, message: String },

    /// Project config file exists but cannot be parsed
    #[error("invalid config in {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },
}

impl LintError {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LintError::Io {
            path: path.into(),
            source,
        }
    }
}
