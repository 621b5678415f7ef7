//! SPDX license list entities
//!
//! `LicenseList` mirrors the JSON published at
//! `https://spdx.org/licenses/licenses.json`. Only `licenseId` and
//! `isDeprecatedLicenseId` take part in validation; the descriptive fields
//! are carried because the source format contains them.

use std::collections::HashSet;

use serde::Deserialize;

/// A single entry of the SPDX `licenses` array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseRecord {
    pub license_id: String,
    #[serde(default, rename = "isDeprecatedLicenseId")]
    pub is_deprecated: bool,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub details_url: String,
    #[serde(default)]
    pub reference_number: u32,
    #[serde(default)]
    pub see_also: Vec<String>,
    #[serde(default)]
    pub is_osi_approved: bool,
    #[serde(default)]
    pub is_fsf_libre: bool,
}

impl LicenseRecord {
    /// Minimal record, mostly useful for tests and fixtures
    pub fn new(license_id: impl Into<String>, is_deprecated: bool) -> Self {
        Self {
            license_id: license_id.into(),
            is_deprecated,
            name: String::new(),
            reference: String::new(),
            details_url: String::new(),
            reference_number: 0,
            see_also: Vec::new(),
            is_osi_approved: false,
            is_fsf_libre: false,
        }
    }
}

/// The full SPDX license list document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseList {
    #[serde(default)]
    pub license_list_version: String,
    pub licenses: Vec<LicenseRecord>,
    #[serde(default)]
    pub release_date: String,
}

impl LicenseList {
    pub fn new(licenses: Vec<LicenseRecord>) -> Self {
        Self {
            license_list_version: String::new(),
            licenses,
            release_date: String::new(),
        }
    }

    /// Collapse the list into the set of non-deprecated identifiers
    pub fn reference_set(&self) -> ReferenceLicenseSet {
        self.licenses
            .iter()
            .filter(|record| !record.is_deprecated)
            .map(|record| record.license_id.clone())
            .collect()
    }
}

/// Identifiers a manifest may declare.
///
/// Built in one step from a complete `LicenseList` and never mutated after,
/// so a check can only ever observe a fully populated set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceLicenseSet {
    ids: HashSet<String>,
}

impl ReferenceLicenseSet {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl FromIterator<String> for ReferenceLicenseSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for ReferenceLicenseSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}
