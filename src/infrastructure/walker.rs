//! Manifest discovery
//!
//! Recursively walks a directory and yields every entry whose file name
//! equals the manifest name. Entries are visited in lexical order per
//! directory. Hidden directories and ignore files are not special: every
//! entry is visited. Any traversal error aborts the walk.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{LintError, LintResult};

/// Walk `root`, calling `visit` for each file named `manifest_name`.
///
/// Returns the number of manifests visited. Stops at the first traversal
/// or visitor error.
pub fn walk_manifests<V>(root: &Path, manifest_name: &str, mut visit: V) -> LintResult<usize>
where
    V: FnMut(&Path) -> LintResult<()>,
{
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    let target = OsStr::new(manifest_name);
    let mut visited = 0;

    for result in builder.build() {
        let entry = result.map_err(|e| LintError::Walk {
            root: root.to_path_buf(),
            message: e.to_string(),
        })?;

        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        if is_dir || entry.file_name() != target {
            continue;
        }

        tracing::debug!(manifest = %entry.path().display(), "found manifest");
        visit(entry.path())?;
        visited += 1;
    }

    Ok(visited)
}

/// Collect all manifest paths under `root`
pub fn find_manifests(root: &Path, manifest_name: &str) -> LintResult<Vec<PathBuf>> {
    let mut found = Vec::new();
    walk_manifests(root, manifest_name, |path| {
        found.push(path.to_path_buf());
        Ok(())
    })?;
    Ok(found)
}
