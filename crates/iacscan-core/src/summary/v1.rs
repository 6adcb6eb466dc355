use crate::model::ReportFormat;
use serde::Serialize;
use std::path::PathBuf;

pub const SCHEMA_V1: &str = "iacscan.summary.v1";

/// Process exit codes derived from a finished audit.
pub const EXIT_OK: i32 = 0;
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// iacscan Summary Schema v1
#[derive(Debug, Serialize, PartialEq)]
pub struct AuditSummary {
    pub schema: String,
    pub generated_at: String,
    pub tool: ToolInfo,
    pub scanner: String,
    pub artifacts_dir: PathBuf,
    pub targets: Vec<TargetReport>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TargetReport {
    pub directory: PathBuf,
    pub prefix: String,
    pub invocations: Vec<InvocationReport>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InvocationReport {
    pub format: ReportFormat,
    pub report_path: PathBuf,
    pub outcome: InvocationOutcome,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InvocationOutcome {
    /// The scanner ran; `code` is None when it was terminated by a signal.
    Exited { code: Option<i32> },
    /// The scanner could not be run to completion.
    Failed { kind: String, message: String },
}

impl InvocationOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, InvocationOutcome::Failed { .. })
    }

    pub fn is_nonzero_exit(&self) -> bool {
        matches!(self, InvocationOutcome::Exited { code } if *code != Some(0))
    }
}

impl TargetReport {
    pub fn has_failures(&self) -> bool {
        self.invocations.iter().any(|i| i.outcome.is_failed())
    }

    pub fn has_nonzero_exits(&self) -> bool {
        self.invocations.iter().any(|i| i.outcome.is_nonzero_exit())
    }
}

impl AuditSummary {
    pub fn new(scanner: impl Into<String>, artifacts_dir: impl Into<PathBuf>) -> Self {
        Self {
            schema: SCHEMA_V1.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            tool: ToolInfo {
                name: "iacscan".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            scanner: scanner.into(),
            artifacts_dir: artifacts_dir.into(),
            targets: Vec::new(),
        }
    }

    pub fn push(&mut self, report: TargetReport) {
        self.targets.push(report);
    }

    pub fn failed_invocations(&self) -> usize {
        self.targets
            .iter()
            .flat_map(|t| &t.invocations)
            .filter(|i| i.outcome.is_failed())
            .count()
    }

    pub fn nonzero_exits(&self) -> usize {
        self.targets
            .iter()
            .flat_map(|t| &t.invocations)
            .filter(|i| i.outcome.is_nonzero_exit())
            .count()
    }

    /// Run errors dominate. A non-zero scanner exit only fails the run when
    /// `fail_on_findings` is set, since Checkov exits 1 whenever a check fails.
    pub fn exit_code(&self, fail_on_findings: bool) -> i32 {
        if self.failed_invocations() > 0 {
            EXIT_ERROR
        } else if fail_on_findings && self.nonzero_exits() > 0 {
            EXIT_FINDINGS
        } else {
            EXIT_OK
        }
    }
}
