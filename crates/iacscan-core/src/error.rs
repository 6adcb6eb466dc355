use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a single scanner invocation could not run to completion.
///
/// A scanner that starts and exits with a non-zero status is not an error here;
/// that is recorded as an exit code on the invocation outcome.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Scanner '{executable}' not found in PATH. Install with: pip install checkov")]
    NotInstalled { executable: String },

    #[error("Failed to spawn scanner '{executable}': {source}")]
    Spawn {
        executable: String,
        #[source]
        source: io::Error,
    },

    #[error("Artifacts directory {path:?} does not exist")]
    ArtifactsDirMissing { path: PathBuf },

    #[error("Artifacts path {path:?} exists but is not a directory")]
    ArtifactsNotDir { path: PathBuf },

    #[error("Failed to open report file {path:?}: {source}")]
    ReportFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Scanner timed out after {secs} seconds")]
    Timeout { secs: u64 },

    #[error("Failed waiting for scanner: {0}")]
    Wait(#[source] io::Error),
}

impl RunError {
    /// Short stable identifier used in the run summary.
    pub fn kind(&self) -> &'static str {
        match self {
            RunError::NotInstalled { .. } => "not_installed",
            RunError::Spawn { .. } => "spawn",
            RunError::ArtifactsDirMissing { .. } => "artifacts_dir_missing",
            RunError::ArtifactsNotDir { .. } => "artifacts_not_dir",
            RunError::ReportFile { .. } => "report_file",
            RunError::Timeout { .. } => "timeout",
            RunError::Wait(_) => "wait",
        }
    }
}
