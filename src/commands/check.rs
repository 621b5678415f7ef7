use std::process::ExitCode;

use anyhow::{Context, Result};

use license_lint::config::{load_or_default, load_with_warnings, with_env_overrides};
use license_lint::{CheckUseCase, HttpFetcher, LocalFs};

use crate::cli::Cli;
use crate::ui::json::{complete_event, start_event, write_event};
use crate::ui::report::{JsonSink, TextSink};

pub fn cmd_check(cli: &Cli) -> Result<ExitCode> {
    let project_root = std::env::current_dir().context("cannot determine working directory")?;

    let (mut config, warnings) = match &cli.config {
        Some(path) => {
            let (config, warnings) = load_with_warnings(path)?;
            (with_env_overrides(config), warnings)
        }
        None => load_or_default(&project_root)?,
    };
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }
    cli.apply(&mut config);

    tracing::debug!(?config, "resolved configuration");

    let use_case = CheckUseCase::new(LocalFs::new(), HttpFetcher::new(), &config);
    let mut out = std::io::stdout().lock();

    let report = if cli.json {
        let _ = write_event(&mut out, &start_event(&config));
        let report = use_case.execute(JsonSink::new(&mut out))?;
        let _ = write_event(&mut out, &complete_event(&report, config.strict));
        report
    } else {
        use_case.execute(TextSink::new(&mut out))?
    };

    if config.strict && !report.is_clean() {
        tracing::info!(findings = report.findings.len(), "strict mode: failing run");
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}
