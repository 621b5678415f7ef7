//! CLI Argument Parsing
//!
//! Every flag is optional; without any, the tool checks `packages/**/package.yml`
//! against `common/licenses.json` and always exits 0 unless a fatal error occurs.

use std::path::PathBuf;

use clap::Parser;
use license_lint::Config;

/// license-lint - check package.yml license identifiers against the SPDX list
#[derive(Parser, Debug)]
#[command(name = "license-lint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to search for manifests
    #[arg(long, value_name = "DIR")]
    pub packages_dir: Option<PathBuf>,

    /// Manifest file name to look for
    #[arg(long, value_name = "NAME")]
    pub manifest_name: Option<String>,

    /// Local cache of the SPDX license list
    #[arg(long, value_name = "PATH")]
    pub cache: Option<PathBuf>,

    /// URL the license list is fetched from when the cache is missing
    #[arg(long, value_name = "URL")]
    pub source_url: Option<String>,

    /// Config file (defaults to ./license-lint.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Exit with status 1 when any finding is reported
    #[arg(long)]
    pub strict: bool,

    /// Report manifests that declare no license
    #[arg(long)]
    pub require_license: bool,

    /// Output NDJSON events instead of plain lines
    #[arg(long)]
    pub json: bool,

    /// Verbosity level on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Apply flags on top of file/env configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.packages_dir {
            config.packages_dir = dir.clone();
        }
        if let Some(name) = &self.manifest_name {
            config.manifest_name = name.clone();
        }
        if let Some(cache) = &self.cache {
            config.cache_path = cache.clone();
        }
        if let Some(url) = &self.source_url {
            config.source_url = url.clone();
        }
        if self.strict {
            config.strict = true;
        }
        if self.require_license {
            config.require_license = true;
        }
    }

    /// Log filter for the verbosity count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
