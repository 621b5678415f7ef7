//! Manifest parser for `package.yml` files
//!
//! The `license` key is either a single scalar or a sequence of scalars.
//! Decoding tries the scalar shape first and falls back to the list shape;
//! a manifest matching neither is malformed. Keys other than `license` are
//! ignored.

use std::path::Path;

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;

use crate::domain::entities::Manifest;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::LicenseField;
use crate::error::{LintError, LintResult};

#[derive(Deserialize)]
struct ScalarShape {
    #[serde(default)]
    license: Option<String>,
}

#[derive(Deserialize)]
struct ListShape {
    #[serde(default)]
    license: Option<Vec<String>>,
}

/// Decode the `license` field of manifest content.
///
/// Only the first YAML document is read; anything after a `---` separator
/// is ignored. Returns `Ok(None)` when the manifest declares no license.
pub fn parse_license_field(content: &str, path: &Path) -> LintResult<Option<LicenseField>> {
    if content.trim().is_empty() {
        return Ok(None);
    }

    let invalid = |message: String| LintError::InvalidManifest {
        path: path.to_path_buf(),
        message,
    };

    // Syntax errors are reported as-is, before any shape is tried.
    match first_document::<IgnoredAny>(content) {
        None => return Ok(None),
        Some(Err(e)) => return Err(invalid(e.to_string())),
        Some(Ok(_)) => {}
    }

    let scalar_err = match first_document::<ScalarShape>(content) {
        Some(Ok(scalar)) => {
            tracing::trace!(manifest = %path.display(), "license decoded as scalar");
            return Ok(scalar.license.map(LicenseField::Scalar));
        }
        Some(Err(e)) => e,
        None => return Ok(None),
    };
    tracing::trace!(manifest = %path.display(), error = %scalar_err, "scalar decode failed, trying list");

    match first_document::<ListShape>(content) {
        Some(Ok(list)) => {
            tracing::trace!(manifest = %path.display(), "license decoded as list");
            Ok(list.license.map(LicenseField::List))
        }
        Some(Err(list_err)) => Err(invalid(format!(
            "`license` is neither a string nor a list of strings \
             (as string: {scalar_err}; as list: {list_err})"
        ))),
        None => Ok(None),
    }
}

/// Decode the first YAML document of `content`, if there is one
fn first_document<T>(content: &str) -> Option<Result<T, serde_yaml_ng::Error>>
where
    T: DeserializeOwned,
{
    serde_yaml_ng::Deserializer::from_str(content)
        .next()
        .map(T::deserialize)
}

/// Parse manifest content into a `Manifest`
pub fn parse_manifest(content: &str, path: &Path) -> LintResult<Manifest> {
    let license = parse_license_field(content, path)?;
    Ok(Manifest::new(path, license))
}

/// Read and parse a manifest file
pub fn read_manifest(fs: &impl FileSystem, path: &Path) -> LintResult<Manifest> {
    let content = fs
        .read(path)
        .map_err(|e| LintError::io(path, e.into_io()))?;
    parse_manifest(&content, path)
}
