use crate::error::RunError;
use std::process::{Child, ExitStatus};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Waits for `child` to exit.
///
/// With a timeout, polls `try_wait` and kills the child once the deadline
/// passes. The child is always reaped before returning.
pub fn wait_with_timeout(
    child: &mut Child,
    timeout: Option<Duration>,
) -> Result<ExitStatus, RunError> {
    let Some(timeout) = timeout else {
        return child.wait().map_err(RunError::Wait);
    };

    let start = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) => {
                if start.elapsed() >= timeout {
                    // kill fails if the child exited in between; reaping below still succeeds
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(RunError::Timeout {
                        secs: timeout.as_secs(),
                    });
                }
                std::thread::sleep(POLL_INTERVAL);
            }
            Err(e) => return Err(RunError::Wait(e)),
        }
    }
}
