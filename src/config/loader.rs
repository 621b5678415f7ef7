//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LintError, LintResult};

use super::types::Config;

/// Project config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "license-lint.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LintResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| LintError::io(path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LintError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `license-lint.toml` from `project_root` if present, else defaults.
///
/// Environment overrides are applied on top either way. A config file that
/// exists but does not parse is an error.
pub fn load_or_default(project_root: &Path) -> LintResult<(Config, Vec<ConfigWarning>)> {
    let path = project_root.join(CONFIG_FILE_NAME);
    let (config, warnings) = if path.is_file() {
        tracing::debug!(config = %path.display(), "loading project config");
        load_with_warnings(&path)?
    } else {
        (Config::default(), Vec::new())
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply `LICENSE_LINT_*` environment variables
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(dir) = non_empty("LICENSE_LINT_PACKAGES_DIR") {
        config.packages_dir = PathBuf::from(dir);
    }

    if let Some(name) = non_empty("LICENSE_LINT_MANIFEST_NAME") {
        config.manifest_name = name;
    }

    if let Some(cache) = non_empty("LICENSE_LINT_CACHE") {
        config.cache_path = PathBuf::from(cache);
    }

    if let Some(url) = non_empty("LICENSE_LINT_SOURCE_URL") {
        config.source_url = url;
    }

    if let Some(val) = non_empty("LICENSE_LINT_STRICT") {
        config.strict = parse_flag(&val);
    }

    if let Some(val) = non_empty("LICENSE_LINT_REQUIRE_LICENSE") {
        config.require_license = parse_flag(&val);
    }

    config
}

fn parse_flag(val: &str) -> bool {
    let val = val.trim().to_lowercase();
    val != "false" && val != "0" && val != "no" && val != "off"
}

/// Keys `Config` accepts, in declaration order
const KNOWN_KEYS: [&str; 6] = [
    "packages_dir",
    "manifest_name",
    "cache_path",
    "source_url",
    "strict",
    "require_license",
];

/// Line (1-based) where `key` is assigned, ignoring comments and values.
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.split_once('=').is_some_and(|(lhs, _)| {
                lhs.trim().trim_matches(|c| c == '"' || c == '\'') == key
            })
        })
        .map(|index| index + 1)
}

/// Closest known key within two edits of `unknown`
fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|known| (edit_distance(unknown, known), *known))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, known)| known.to_string())
}

/// Levenshtein distance over chars, keeping a single row of the table.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_lookup_matches_assignments_only() {
        let content = "# strict = true is a comment\nsource_url = \"strict\"\nstrict = true\n";
        assert_eq!(find_line_number(content, "strict"), Some(3));
        assert_eq!(find_line_number(content, "cache_path"), None);
    }

    #[test]
    fn suggestion_requires_close_match() {
        assert_eq!(suggest_key("packages-dir").as_deref(), Some("packages_dir"));
        assert_eq!(suggest_key("stric").as_deref(), Some("strict"));
        assert_eq!(suggest_key("verbosity"), None);
    }

    #[test]
    fn edit_distance_basics() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("strict", "strict"), 0);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("licence", "license"), 1);
    }
}
