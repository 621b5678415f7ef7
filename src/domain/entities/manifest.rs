//! Parsed package manifest

use std::path::{Path, PathBuf};

use crate::domain::value_objects::LicenseField;

/// The parts of a `package.yml` that license checking cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    path: PathBuf,
    license: Option<LicenseField>,
}

impl Manifest {
    pub fn new(path: impl Into<PathBuf>, license: Option<LicenseField>) -> Self {
        Self {
            path: path.into(),
            license,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `None` when the manifest has no `license` key (or it is null)
    pub fn license(&self) -> Option<&LicenseField> {
        self.license.as_ref()
    }

    /// Declared identifiers in order; empty when no license is declared
    pub fn license_ids(&self) -> impl Iterator<Item = &str> {
        self.license.iter().flat_map(|field| field.ids())
    }
}
