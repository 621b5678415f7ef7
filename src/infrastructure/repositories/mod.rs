//! Repository implementations

mod license_cache;

pub use license_cache::SpdxLicenseRepository;
