pub mod v1;

pub use v1::{
    AuditSummary, InvocationOutcome, InvocationReport, TargetReport, ToolInfo, EXIT_ERROR,
    EXIT_FINDINGS, EXIT_OK, SCHEMA_V1,
};

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes the summary as pretty JSON. The file is staged next to `path` and
/// persisted over it, so readers never see a partial summary.
pub fn write_summary(summary: &AuditSummary, path: &Path) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut staged = NamedTempFile::new_in(parent)?;
    serde_json::to_writer_pretty(&mut staged, summary).map_err(io::Error::other)?;
    staged.write_all(b"\n")?;
    staged.as_file().sync_all()?;

    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}
