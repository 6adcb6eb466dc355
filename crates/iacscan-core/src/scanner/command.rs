use crate::model::ReportFormat;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

/// How to call the external scanner.
///
/// Arguments are kept as discrete tokens and handed straight to the OS; no
/// shell ever sees the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerCommand {
    executable: String,
    extra_args: Vec<String>,
}

impl ScannerCommand {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            extra_args: Vec::new(),
        }
    }

    pub fn with_extra_args(mut self, extra_args: Vec<String>) -> Self {
        self.extra_args = extra_args;
        self
    }

    pub fn from_config(config: &iacscan_config::ScannerConfig) -> Self {
        Self::new(config.executable.clone()).with_extra_args(config.extra_args.clone())
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// `[extra_args..., "-d", <directory>, "-o", <format>]`
    pub fn args(&self, directory: &Path, format: ReportFormat) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.extra_args.iter().map(OsString::from).collect();
        args.push("-d".into());
        args.push(directory.as_os_str().to_owned());
        args.push("-o".into());
        args.push(format.flag().into());
        args
    }

    /// Builds the process without configuring stdio.
    pub fn build(&self, directory: &Path, format: ReportFormat) -> Command {
        let mut cmd = Command::new(&self.executable);
        cmd.args(self.args(directory, format));
        cmd
    }
}

impl Default for ScannerCommand {
    fn default() -> Self {
        Self::new("checkov")
    }
}
