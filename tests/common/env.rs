//! Test environment builder for isolated license-lint runs.
//!
//! Provides `TestEnv` - a temp monorepo root with a `packages/` directory and
//! (optionally) a seeded `common/licenses.json`, plus helpers to run the CLI.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::{LICENSE_LIST, UNREACHABLE_URL};

/// Result of running a license-lint command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// stdout lines, in order
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}

/// Isolated monorepo in a temp directory
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty `packages/` and a seeded license list cache
    pub fn new() -> Self {
        let env = Self::without_cache();
        env.write_file("common/licenses.json", LICENSE_LIST);
        env
    }

    /// Empty `packages/`, no cache
    pub fn without_cache() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir_all(root.path().join("packages")).expect("Failed to create packages");
        Self {
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_license-lint")),
        }
    }

    /// Get path relative to the monorepo root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write `packages/<package>/package.yml`
    pub fn write_manifest(&self, package: &str, content: &str) {
        self.write_file(&format!("packages/{}/package.yml", package), content);
    }

    /// Write a file relative to the monorepo root
    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Run license-lint from the monorepo root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("LICENSE_LINT_SOURCE_URL", UNREACHABLE_URL);
        for var in [
            "RUST_LOG",
            "LICENSE_LINT_PACKAGES_DIR",
            "LICENSE_LINT_MANIFEST_NAME",
            "LICENSE_LINT_CACHE",
            "LICENSE_LINT_STRICT",
            "LICENSE_LINT_REQUIRE_LICENSE",
        ] {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute license-lint");
        output_to_result(output)
    }

    pub fn root_path(&self) -> &Path {
        self.root.path()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
