//! Configuration module for license-lint
//!
//! Resolution order:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (LICENSE_LINT_*)
//! 3. Project config (`license-lint.toml` in the working directory)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_env_overrides, load_or_default, load_with_warnings, with_env_overrides, ConfigWarning,
    CONFIG_FILE_NAME,
};
pub use types::{
    Config, DEFAULT_CACHE_PATH, DEFAULT_MANIFEST_NAME, DEFAULT_PACKAGES_DIR, DEFAULT_SOURCE_URL,
};
