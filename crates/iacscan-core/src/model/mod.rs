use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Output mode requested from the scanner for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Json,
    Cli,
}

impl ReportFormat {
    /// Invocation order for every target.
    pub const ORDERED: [ReportFormat; 2] = [ReportFormat::Json, ReportFormat::Cli];

    /// Value passed to the scanner's `-o` flag.
    pub fn flag(self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Cli => "cli",
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            ReportFormat::Json => "_checkov.json",
            ReportFormat::Cli => "_checkov.txt",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanTarget {
    pub directory: PathBuf,
    pub prefix: String,
}

impl ScanTarget {
    pub fn new(directory: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            prefix: prefix.into(),
        }
    }
}

impl From<&iacscan_config::TargetConfig> for ScanTarget {
    fn from(target: &iacscan_config::TargetConfig) -> Self {
        Self::new(target.directory.clone(), target.prefix.clone())
    }
}

/// The JSON and text report paths for one prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPair {
    pub json: PathBuf,
    pub text: PathBuf,
}

impl ReportPair {
    /// Joins `{prefix}{suffix}` onto the artifacts directory. The prefix is used verbatim.
    pub fn for_prefix(artifacts_dir: &Path, prefix: &str) -> Self {
        Self {
            json: artifacts_dir.join(format!("{}{}", prefix, ReportFormat::Json.suffix())),
            text: artifacts_dir.join(format!("{}{}", prefix, ReportFormat::Cli.suffix())),
        }
    }

    pub fn path(&self, format: ReportFormat) -> &Path {
        match format {
            ReportFormat::Json => &self.json,
            ReportFormat::Cli => &self.text,
        }
    }
}
