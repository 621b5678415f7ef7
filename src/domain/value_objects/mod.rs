//! Value objects

mod license_field;

pub use license_field::LicenseField;
