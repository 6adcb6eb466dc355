use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default = "default_targets")]
    pub targets: Vec<TargetConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scanner: ScannerConfig::default(),
            output: OutputConfig::default(),
            targets: default_targets(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ScannerConfig {
    /// Executable name or path (looked up on PATH when bare)
    #[serde(default = "default_executable")]
    pub executable: String,
    /// Per-invocation timeout. None waits forever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Passed before `-d <dir> -o <format>`
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            timeout_secs: None,
            extra_args: Vec::new(),
        }
    }
}

fn default_executable() -> String {
    "checkov".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_artifacts_dir")]
    pub artifacts_dir: PathBuf,
    #[serde(default = "default_true")]
    pub create_artifacts_dir: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            artifacts_dir: default_artifacts_dir(),
            create_artifacts_dir: true,
        }
    }
}

fn default_artifacts_dir() -> PathBuf {
    PathBuf::from("artifacts")
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TargetConfig {
    pub directory: PathBuf,
    pub prefix: String,
}

impl TargetConfig {
    pub fn new(directory: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            prefix: prefix.into(),
        }
    }
}

/// The two audit targets: the insecure samples and their fixed counterparts.
pub fn default_targets() -> Vec<TargetConfig> {
    vec![
        TargetConfig::new("examples", "insecure"),
        TargetConfig::new("fixed", "fixed"),
    ]
}

fn default_true() -> bool {
    true
}
