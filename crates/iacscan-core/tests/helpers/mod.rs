//! Fake scanner used in place of Checkov.
//!
//! The script is run as `sh <script> -d <dir> -o <format>` so it never has to
//! be exec'd directly, which avoids ETXTBSY races between parallel tests.

use std::fs;
use std::path::{Path, PathBuf};

pub struct FakeScanner {
    pub script: PathBuf,
    pub log: PathBuf,
}

impl FakeScanner {
    /// Echoes its arguments to stdout and appends them to `calls.log`.
    pub fn install(dir: &Path, exit_code: i32) -> Self {
        Self::install_with_body(dir, &format!("exit {exit_code}"))
    }

    pub fn install_with_body(dir: &Path, tail: &str) -> Self {
        let script = dir.join("fake_checkov.sh");
        let log = dir.join("calls.log");
        let body = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$*\" >> '{log}'\necho \"fake report: $*\"\n{tail}\n",
            log = log.display(),
        );
        fs::write(&script, body).unwrap();
        Self { script, log }
    }

    pub fn command(&self) -> iacscan_core::ScannerCommand {
        iacscan_core::ScannerCommand::new("sh")
            .with_extra_args(vec![self.script.display().to_string()])
    }

    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
