//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod finding_sink;
pub mod license_fetcher;

pub use file_system::{FileSystem, FsError, FsResult};
pub use finding_sink::{CollectingSink, FindingSink, NullSink};
pub use license_fetcher::{FetchError, LicenseFetcher};
