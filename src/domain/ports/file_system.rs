//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the loader and parser read and write files without depending on
//! a concrete implementation (local disk, in-memory mock).

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Classify an I/O error, remembering the path it happened on
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }

    /// Convert back into an `io::Error` for the library error type
    pub fn into_io(self) -> std::io::Error {
        match self {
            FsError::NotFound(path) => std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ),
            FsError::PermissionDenied(path) => std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            ),
            FsError::Io(err) => err,
            FsError::Other(msg) => std::io::Error::other(msg),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::from_io(Path::new(""), err)
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test mocks - in-memory maps
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write bytes to file atomically, creating parent directories
    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Check if file exists.
    ///
    /// Only a missing path is `Ok(false)`; an inaccessible one is an error.
    fn exists(&self, path: &Path) -> FsResult<bool>;

    /// Remove a file
    fn remove(&self, path: &Path) -> FsResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_error_display() {
        let err = FsError::NotFound(PathBuf::from("test.txt"));
        assert!(err.to_string().contains("test.txt"));
    }

    #[test]
    fn fs_error_from_io_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let fs_err = FsError::from_io(Path::new("common/licenses.json"), io_err);
        assert!(matches!(fs_err, FsError::NotFound(ref p) if p == Path::new("common/licenses.json")));
    }

    #[test]
    fn fs_error_round_trips_kind() {
        let err = FsError::PermissionDenied(PathBuf::from("x"));
        assert_eq!(err.into_io().kind(), std::io::ErrorKind::PermissionDenied);
    }
}
