//! Finding sink port
//!
//! The check pipeline streams findings as they are produced instead of
//! collecting them first. Implementations:
//! - `TextSink` / `JsonSink` (binary): stdout reporters
//! - `CollectingSink`: keeps findings in memory (tests, library callers)
//! - `NullSink`: discards everything

use crate::domain::entities::Finding;

/// Receives findings in traversal order
pub trait FindingSink {
    fn on_finding(&mut self, finding: &Finding);
}

impl<T: FindingSink + ?Sized> FindingSink for &mut T {
    fn on_finding(&mut self, finding: &Finding) {
        (**self).on_finding(finding)
    }
}

/// Discards all findings
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl FindingSink for NullSink {
    fn on_finding(&mut self, _finding: &Finding) {}
}

/// Keeps every finding in arrival order
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    pub findings: Vec<Finding>,
}

impl FindingSink for CollectingSink {
    fn on_finding(&mut self, finding: &Finding) {
        self.findings.push(finding.clone());
    }
}
