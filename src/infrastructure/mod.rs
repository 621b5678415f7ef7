//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `http/` - SPDX list download
//! - `repositories/` - Cached license list repository
//! - `walker` - Manifest discovery

pub mod fs;
pub mod http;
pub mod repositories;
pub mod walker;

// Re-export for convenience
pub use fs::LocalFs;
pub use http::HttpFetcher;
pub use repositories::SpdxLicenseRepository;
pub use walker::{find_manifests, walk_manifests};
