use std::io::{self, Write};

use license_lint::{CheckReport, Config, Finding, FindingKind};
use serde_json::json;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

pub fn start_event(config: &Config) -> serde_json::Value {
    json!({
        "event": "start",
        "command": "check",
        "packages_dir": config.packages_dir.display().to_string(),
        "manifest_name": config.manifest_name,
        "cache": config.cache_path.display().to_string(),
        "strict": config.strict,
        "require_license": config.require_license,
    })
}

pub fn finding_event(finding: &Finding) -> serde_json::Value {
    let kind = match finding.kind() {
        FindingKind::InvalidIdentifier(_) => "invalid_identifier",
        FindingKind::MissingLicense => "missing_license",
    };
    json!({
        "event": "finding",
        "kind": kind,
        "manifest": finding.manifest().display().to_string(),
        "license": finding.identifier(),
    })
}

pub fn complete_event(report: &CheckReport, strict: bool) -> serde_json::Value {
    let status = match (report.is_clean(), strict) {
        (true, _) => "success",
        (false, false) => "findings",
        (false, true) => "failure",
    };
    json!({
        "event": "complete",
        "command": "check",
        "status": status,
        "manifests": report.manifests,
        "identifiers": report.identifiers,
        "findings": report.findings.len(),
    })
}
