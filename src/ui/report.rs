//! Finding sinks that write to stdout
//!
//! Write errors are dropped: a closed stdout must not turn a finding into a
//! fatal error.

use std::io::Write;

use license_lint::{Finding, FindingSink};

use super::json::{finding_event, write_event};

/// One plain line per finding
pub struct TextSink<W> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> FindingSink for TextSink<W> {
    fn on_finding(&mut self, finding: &Finding) {
        let _ = writeln!(self.out, "{}", finding);
    }
}

/// One NDJSON `finding` event per finding
pub struct JsonSink<W> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> FindingSink for JsonSink<W> {
    fn on_finding(&mut self, finding: &Finding) {
        let _ = write_event(&mut self.out, &finding_event(finding));
    }
}
