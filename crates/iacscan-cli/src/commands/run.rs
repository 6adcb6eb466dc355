use crate::cli::RunArgs;
use crate::output::formatter::print_summary;
use anyhow::{Context, Result};
use iacscan_config::{load_effective_config, validate::validate_config};
use iacscan_core::{write_summary, AuditSummary, ScanRunner, ScanTarget};
use std::path::PathBuf;
use tracing::{error, info};

/// Runs every configured target in order and returns the process exit code.
///
/// Both banners print whatever the scans do; failures surface through the
/// summary and the exit code.
pub fn run(config_path: Option<&PathBuf>, args: &RunArgs) -> Result<i32> {
    let mut config = load_effective_config(config_path)?;
    if let Some(secs) = args.timeout {
        config.scanner.timeout_secs = Some(secs);
        validate_config(&config)?;
    }

    let runner = ScanRunner::from_config(&config);

    println!("--- Starting IaC Audit Scan ---");

    if let Err(e) = runner.prepare_artifacts_dir(config.output.create_artifacts_dir) {
        error!(
            path = %runner.artifacts_dir().display(),
            error = %e,
            "Failed to create artifacts directory"
        );
    }

    let mut summary = AuditSummary::new(runner.command().executable(), runner.artifacts_dir());
    for target in &config.targets {
        summary.push(runner.run_target(&ScanTarget::from(target)));
    }

    println!("--- All scans finished. ---");

    print_summary(&summary);

    if let Some(path) = &args.summary {
        write_summary(&summary, path)
            .with_context(|| format!("Failed to write run summary to {:?}", path))?;
        info!(path = %path.display(), "Run summary written");
    }

    Ok(summary.exit_code(args.fail_on_findings))
}
