//! Property tests for license-lint.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/reference_set.rs"]
mod reference_set;

#[path = "properties/license_field.rs"]
mod license_field;
