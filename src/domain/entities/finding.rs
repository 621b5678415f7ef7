//! Reported (non-fatal) license problems

use std::fmt;
use std::path::{Path, PathBuf};

/// What is wrong with a manifest's license declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingKind {
    /// Declared identifier is not a current SPDX license id
    InvalidIdentifier(String),
    /// Manifest declares no license at all (only reported when required)
    MissingLicense,
}

/// A single problem found in a single manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    manifest: PathBuf,
    kind: FindingKind,
}

impl Finding {
    pub fn invalid_identifier(manifest: impl Into<PathBuf>, id: impl Into<String>) -> Self {
        Self {
            manifest: manifest.into(),
            kind: FindingKind::InvalidIdentifier(id.into()),
        }
    }

    pub fn missing_license(manifest: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
            kind: FindingKind::MissingLicense,
        }
    }

    pub fn manifest(&self) -> &Path {
        &self.manifest
    }

    pub fn kind(&self) -> &FindingKind {
        &self.kind
    }

    /// The offending identifier, if this finding is about one
    pub fn identifier(&self) -> Option<&str> {
        match &self.kind {
            FindingKind::InvalidIdentifier(id) => Some(id),
            FindingKind::MissingLicense => None,
        }
    }
}

/// Plain-text report line: `BAD: <path> <id>` or `MISSING: <path>`
impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FindingKind::InvalidIdentifier(id) => {
                write!(f, "BAD: {} {}", self.manifest.display(), id)
            }
            FindingKind::MissingLicense => write!(f, "MISSING: {}", self.manifest.display()),
        }
    }
}
