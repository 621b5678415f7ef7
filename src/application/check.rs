//! Check Use Case
//!
//! Orchestrates one license-check pass over a monorepo:
//! load reference set → walk packages → parse each manifest → validate.
//!
//! The reference set is fully loaded before the first manifest is read.
//! Findings are streamed to the caller's sink as they are produced and also
//! recorded in the returned `CheckReport`.

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::entities::Finding;
use crate::domain::ports::{FileSystem, FindingSink, LicenseFetcher};
use crate::domain::services::Validator;
use crate::error::LintResult;
use crate::infrastructure::repositories::SpdxLicenseRepository;
use crate::infrastructure::walker::walk_manifests;
use crate::parser::read_manifest;

/// Options for the check operation
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Directory walked for manifests
    pub packages_dir: PathBuf,
    /// File name that marks a manifest
    pub manifest_name: String,
    /// Report manifests without a license field
    pub require_license: bool,
}

impl From<&Config> for CheckOptions {
    fn from(config: &Config) -> Self {
        Self {
            packages_dir: config.packages_dir.clone(),
            manifest_name: config.manifest_name.clone(),
            require_license: config.require_license,
        }
    }
}

impl Default for CheckOptions {
    fn default() -> Self {
        CheckOptions::from(&Config::default())
    }
}

/// Result of the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    /// Number of manifests read
    pub manifests: usize,
    /// Number of identifiers tested against the reference set
    pub identifiers: usize,
    /// Size of the reference set used
    pub reference_size: usize,
    /// Findings in traversal order
    pub findings: Vec<Finding>,
}

impl CheckReport {
    /// No findings at all
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Forwards findings to the caller while keeping a copy for the report
struct Recording<'a, S> {
    inner: S,
    findings: &'a mut Vec<Finding>,
}

impl<S: FindingSink> FindingSink for Recording<'_, S> {
    fn on_finding(&mut self, finding: &Finding) {
        self.findings.push(finding.clone());
        self.inner.on_finding(finding);
    }
}

/// Check Use Case
pub struct CheckUseCase<F, H> {
    fs: F,
    repository: SpdxLicenseRepository<F, H>,
    options: CheckOptions,
}

impl<F, H> CheckUseCase<F, H>
where
    F: FileSystem + Clone,
    H: LicenseFetcher,
{
    /// Build the use case from resolved configuration
    pub fn new(fs: F, fetcher: H, config: &Config) -> Self {
        let repository = SpdxLicenseRepository::new(
            fs.clone(),
            fetcher,
            config.cache_path.clone(),
            config.source_url.clone(),
        );
        Self {
            fs,
            repository,
            options: CheckOptions::from(config),
        }
    }

    /// Run the full pass, streaming findings into `sink`
    pub fn execute(&self, sink: impl FindingSink) -> LintResult<CheckReport> {
        let reference = self.repository.load_reference_set()?;
        let validator =
            Validator::new(&reference).with_require_license(self.options.require_license);

        let mut report = CheckReport {
            reference_size: reference.len(),
            ..CheckReport::default()
        };
        let mut identifiers = 0;
        let mut recording = Recording {
            inner: sink,
            findings: &mut report.findings,
        };

        let manifests = walk_manifests(
            &self.options.packages_dir,
            &self.options.manifest_name,
            |path| {
                let manifest = read_manifest(&self.fs, path)?;
                identifiers += validator.check_manifest(&manifest, &mut recording);
                Ok(())
            },
        )?;
        drop(recording);

        report.manifests = manifests;
        report.identifiers = identifiers;

        tracing::info!(
            manifests = report.manifests,
            identifiers = report.identifiers,
            findings = report.findings.len(),
            "license check complete"
        );
        Ok(report)
    }
}
