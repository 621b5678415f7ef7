//! Common test utilities for license-lint CLI tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated monorepo in a temp directory
//! - Fixtures: a small SPDX license list
//! - `serve_once`: a single-response HTTP server

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
pub mod server;

pub use env::*;
pub use fixtures::*;
pub use server::*;
