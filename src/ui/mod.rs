//! Output for the CLI: plain `BAD:` lines or NDJSON events on stdout

pub mod json;
pub mod report;
