pub mod error;
pub mod model;
pub mod scanner;
pub mod summary;

pub use error::RunError;
pub use model::{ReportFormat, ReportPair, ScanTarget};
pub use scanner::{ScanRunner, ScannerCommand};
pub use summary::{
    write_summary, AuditSummary, InvocationOutcome, InvocationReport, TargetReport, EXIT_ERROR,
    EXIT_FINDINGS, EXIT_OK,
};
