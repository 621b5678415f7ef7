//! Validator - membership test of declared identifiers against the reference set

use std::path::Path;

use crate::domain::entities::{Finding, Manifest, ReferenceLicenseSet};
use crate::domain::ports::FindingSink;

/// Checks manifests against a fully loaded `ReferenceLicenseSet`.
///
/// Success is silent: only failures reach the sink. Findings never stop
/// the run.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    reference: &'a ReferenceLicenseSet,
    require_license: bool,
}

impl<'a> Validator<'a> {
    pub fn new(reference: &'a ReferenceLicenseSet) -> Self {
        Self {
            reference,
            require_license: false,
        }
    }

    /// Report manifests with no `license` field instead of passing them
    pub fn with_require_license(mut self, require_license: bool) -> Self {
        self.require_license = require_license;
        self
    }

    /// Check one identifier declared by `manifest`
    pub fn check_id(&self, manifest: &Path, id: &str) -> Option<Finding> {
        if self.reference.contains(id) {
            None
        } else {
            Some(Finding::invalid_identifier(manifest, id))
        }
    }

    /// Check every identifier of a manifest in declaration order.
    ///
    /// Returns the number of identifiers checked.
    pub fn check_manifest(&self, manifest: &Manifest, sink: &mut impl FindingSink) -> usize {
        if manifest.license().is_none() {
            if self.require_license {
                sink.on_finding(&Finding::missing_license(manifest.path()));
            }
            return 0;
        }

        let mut checked = 0;
        for id in manifest.license_ids() {
            checked += 1;
            if let Some(finding) = self.check_id(manifest.path(), id) {
                sink.on_finding(&finding);
            }
        }
        checked
    }
}
