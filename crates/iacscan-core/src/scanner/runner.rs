use crate::error::RunError;
use crate::model::{ReportFormat, ReportPair, ScanTarget};
use crate::scanner::command::ScannerCommand;
use crate::scanner::process::wait_with_timeout;
use crate::summary::{InvocationOutcome, InvocationReport, TargetReport};
use std::fs::{self, File};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument, warn};

/// Runs the scanner against a directory and captures each output format to
/// its own report file.
#[derive(Debug, Clone)]
pub struct ScanRunner {
    command: ScannerCommand,
    artifacts_dir: PathBuf,
    timeout: Option<Duration>,
}

impl ScanRunner {
    pub fn new(command: ScannerCommand, artifacts_dir: impl Into<PathBuf>) -> Self {
        Self {
            command,
            artifacts_dir: artifacts_dir.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_config(config: &iacscan_config::Config) -> Self {
        Self::new(
            ScannerCommand::from_config(&config.scanner),
            config.output.artifacts_dir.clone(),
        )
        .with_timeout(config.scanner.timeout_secs.map(Duration::from_secs))
    }

    pub fn command(&self) -> &ScannerCommand {
        &self.command
    }

    pub fn artifacts_dir(&self) -> &Path {
        &self.artifacts_dir
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Creates the artifacts directory when `create` is set. Otherwise leaves
    /// a missing directory for each invocation to report.
    pub fn prepare_artifacts_dir(&self, create: bool) -> io::Result<()> {
        if create {
            fs::create_dir_all(&self.artifacts_dir)?;
            debug!(path = %self.artifacts_dir.display(), "Artifacts directory ready");
        } else if self.artifacts_dir.exists() && !self.artifacts_dir.is_dir() {
            warn!(
                path = %self.artifacts_dir.display(),
                "Artifacts path is not a directory"
            );
        } else if !self.artifacts_dir.is_dir() {
            warn!(
                path = %self.artifacts_dir.display(),
                "Artifacts directory missing and creation is disabled"
            );
        }
        Ok(())
    }

    pub fn run_target(&self, target: &ScanTarget) -> TargetReport {
        self.run_scan(&target.directory, &target.prefix)
    }

    /// Runs the JSON and then the CLI invocation for `directory`, writing to
    /// `{artifacts}/{output_prefix}_checkov.json` and `.txt`.
    ///
    /// Both invocations are attempted and the completion line is printed
    /// regardless of their outcome.
    #[instrument(skip(self, directory), fields(directory = %directory.display()))]
    pub fn run_scan(&self, directory: &Path, output_prefix: &str) -> TargetReport {
        println!("Running Checkov on {}...", directory.display());

        let reports = ReportPair::for_prefix(&self.artifacts_dir, output_prefix);
        let mut invocations = Vec::with_capacity(ReportFormat::ORDERED.len());

        for format in ReportFormat::ORDERED {
            let report_path = reports.path(format);
            let started = Instant::now();

            let outcome = match self.run_invocation(directory, format, report_path) {
                Ok(code) => {
                    if code == Some(0) {
                        info!(%format, "Scanner finished");
                    } else {
                        warn!(%format, exit_code = ?code, "Scanner exited non-zero");
                    }
                    InvocationOutcome::Exited { code }
                }
                Err(e) => {
                    error!(%format, error = %e, "Scanner invocation failed");
                    InvocationOutcome::Failed {
                        kind: e.kind().to_string(),
                        message: e.to_string(),
                    }
                }
            };

            invocations.push(InvocationReport {
                format,
                report_path: report_path.to_path_buf(),
                outcome,
                duration_ms: started.elapsed().as_millis() as u64,
            });
        }

        println!(
            "Scans complete for {}. Check {}/ directory.",
            directory.display(),
            self.artifacts_dir.display()
        );

        TargetReport {
            directory: directory.to_path_buf(),
            prefix: output_prefix.to_string(),
            invocations,
        }
    }

    /// One blocking scanner run with stdout sent to `report_path`.
    ///
    /// Returns the scanner's exit code, or `None` if it was killed by a signal.
    pub fn run_invocation(
        &self,
        directory: &Path,
        format: ReportFormat,
        report_path: &Path,
    ) -> Result<Option<i32>, RunError> {
        if !self.artifacts_dir.is_dir() {
            let path = self.artifacts_dir.clone();
            return Err(if path.exists() {
                RunError::ArtifactsNotDir { path }
            } else {
                RunError::ArtifactsDirMissing { path }
            });
        }

        // Truncates on open, so reruns overwrite rather than append.
        let report = File::create(report_path).map_err(|source| RunError::ReportFile {
            path: report_path.to_path_buf(),
            source,
        })?;

        let mut cmd = self.command.build(directory, format);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::from(report))
            .stderr(Stdio::inherit());

        debug!(command = ?cmd, report = %report_path.display(), "Executing scanner");

        let mut child = cmd.spawn().map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                RunError::NotInstalled {
                    executable: self.command.executable().to_string(),
                }
            } else {
                RunError::Spawn {
                    executable: self.command.executable().to_string(),
                    source,
                }
            }
        })?;

        // `cmd` still holds the parent's copy of the report handle.
        drop(cmd);

        let status = wait_with_timeout(&mut child, self.timeout)?;
        Ok(status.code())
    }
}
