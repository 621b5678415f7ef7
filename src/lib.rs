//! license-lint - SPDX license checker for package monorepos
//!
//! Walks a `packages` directory, reads every `package.yml`, and checks the
//! declared `license` identifier(s) against the non-deprecated entries of
//! the SPDX license list. The list is cached locally and downloaded only
//! when the cache is missing.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod parser;

// Re-exports for convenience
pub use application::{CheckOptions, CheckReport, CheckUseCase};
pub use config::Config;
pub use domain::entities::{Finding, FindingKind, LicenseList, LicenseRecord, Manifest, ReferenceLicenseSet};
pub use domain::ports::{CollectingSink, FileSystem, FindingSink, LicenseFetcher, NullSink};
pub use domain::services::Validator;
pub use domain::value_objects::LicenseField;
pub use error::{LintError, LintResult};
pub use infrastructure::{HttpFetcher, LocalFs, SpdxLicenseRepository};
pub use parser::{parse_license_field, parse_manifest, read_manifest};
