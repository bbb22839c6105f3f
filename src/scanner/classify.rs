//! Outcome classification for a finished scanner invocation.
//!
//! Only the exit status and which stream is non-empty drive the decision; the
//! stream content is relayed verbatim and never interpreted.

use crate::error::{Result, ScanError};
use crate::scanner::runner::InvocationResult;

#[derive(Debug)]
pub enum ClassifiedOutcome {
    /// Clean exit; carries the raw stdout bytes, which may be empty.
    Success(Vec<u8>),
    /// Clean exit with nothing on stdout but something on stderr.
    DetectedFailure(String),
    /// Spawn failure or non-zero exit. Streams are not examined.
    ExecutionError(ScanError),
}

impl ClassifiedOutcome {
    /// Collapse into the report bytes, or the error the subcommand fails with.
    pub fn into_report(self, failure_message: &str) -> Result<Vec<u8>> {
        match self {
            ClassifiedOutcome::Success(report) => Ok(report),
            ClassifiedOutcome::DetectedFailure(stderr) => Err(ScanError::CommandFailed {
                message: failure_message.to_string(),
                stderr,
            }),
            ClassifiedOutcome::ExecutionError(err) => Err(err),
        }
    }
}

#[must_use]
pub fn classify(result: Result<InvocationResult>) -> ClassifiedOutcome {
    let result = match result {
        Ok(result) => result,
        Err(err) => return ClassifiedOutcome::ExecutionError(err),
    };

    match result.exit_code {
        Some(0) => {}
        Some(code) => return ClassifiedOutcome::ExecutionError(ScanError::ExitCode(code)),
        None => return ClassifiedOutcome::ExecutionError(ScanError::Terminated),
    }

    if !result.stdout.is_empty() {
        ClassifiedOutcome::Success(result.stdout)
    } else if !result.stderr.is_empty() {
        // Only shown to the user as error detail, never relayed as a report.
        ClassifiedOutcome::DetectedFailure(String::from_utf8_lossy(&result.stderr).into_owned())
    } else {
        ClassifiedOutcome::Success(Vec::new())
    }
}
