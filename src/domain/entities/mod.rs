//! Domain entities

mod finding;
mod license_list;
mod manifest;

pub use finding::{Finding, FindingKind};
pub use license_list::{LicenseList, LicenseRecord, ReferenceLicenseSet};
pub use manifest::Manifest;
