use colored::*;
use iacscan_core::{AuditSummary, InvocationOutcome, InvocationReport, TargetReport};

pub fn print_summary(summary: &AuditSummary) {
    println!();
    println!("{}", "Summary:".bold());
    for target in &summary.targets {
        print_target(target);
    }

    let failed = summary.failed_invocations();
    if failed > 0 {
        println!(
            "{} {} scanner invocation(s) could not run. See errors above.",
            "[ERR]".red(),
            failed
        );
    }
}

fn print_target(target: &TargetReport) {
    let status = if target.has_failures() {
        "[ERR]".red()
    } else if target.has_nonzero_exits() {
        "[WARN]".yellow()
    } else {
        "[OK]".green()
    };

    let invocations: Vec<String> = target.invocations.iter().map(describe).collect();

    println!(
        "{} {} ({})  {}",
        status,
        target.directory.display(),
        target.prefix.cyan(),
        invocations.join("  ")
    );
}

fn describe(invocation: &InvocationReport) -> String {
    let outcome = match &invocation.outcome {
        InvocationOutcome::Exited { code: Some(code) } => format!("exit {}", code),
        InvocationOutcome::Exited { code: None } => "killed".to_string(),
        InvocationOutcome::Failed { kind, .. } => format!("failed ({})", kind),
    };
    format!("{}: {}", invocation.format, outcome)
}
