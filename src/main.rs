//! license-lint CLI
//!
//! Usage: license-lint [OPTIONS]
//!
//! Checks every `package.yml` under `packages/` against the SPDX license list
//! and prints `BAD: <path> <id>` for each unknown identifier.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod ui;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    init_tracing(cli.log_level());

    commands::check::cmd_check(&cli)
}

/// Diagnostics go to stderr; stdout carries only findings.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
