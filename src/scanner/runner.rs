use crate::error::{Result, ScanError};
use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

/// A single child-process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub executable: PathBuf,
    pub argv: Vec<String>,
}

impl InvocationRequest {
    pub fn new(executable: impl Into<PathBuf>, argv: Vec<String>) -> Self {
        Self {
            executable: executable.into(),
            argv,
        }
    }
}

impl fmt::Display for InvocationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.executable.display())?;
        for arg in &self.argv {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Exit code plus both captured streams of a finished child.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationResult {
    /// `None` when the child was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl InvocationResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Spawns a scanner and waits for it to exit.
pub trait ProcessRunner: Send + Sync {
    fn run(
        &self,
        request: &InvocationRequest,
    ) -> impl Future<Output = Result<InvocationResult>> + Send;
}

/// Runs the child with `tokio::process`, stdin closed and both output
/// streams captured in full.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioRunner {
    timeout: Option<Duration>,
}

impl TokioRunner {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl ProcessRunner for TokioRunner {
    async fn run(&self, request: &InvocationRequest) -> Result<InvocationResult> {
        let child = Command::new(&request.executable)
            .args(&request.argv)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ScanError::Spawn {
                program: request.executable.clone(),
                source,
            })?;

        debug!("Spawned {} (pid {:?})", request.executable.display(), child.id());

        // Dropping the wait future on timeout drops the child, which kills it.
        let output = match self.timeout {
            Some(limit) => timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| ScanError::Timeout(limit))??,
            None => child.wait_with_output().await?,
        };

        Ok(InvocationResult {
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_display() {
        let request = InvocationRequest::new(
            "/usr/bin/java",
            vec!["-jar".into(), "res/a.jar".into(), "src".into()],
        );
        assert_eq!(request.to_string(), "/usr/bin/java -jar res/a.jar src");
    }

    #[test]
    fn test_result_success() {
        let ok = InvocationResult {
            exit_code: Some(0),
            ..Default::default()
        };
        assert!(ok.success());
        let failed = InvocationResult {
            exit_code: Some(2),
            ..Default::default()
        };
        assert!(!failed.success());
        assert!(!InvocationResult::default().success());
    }

    #[tokio::test]
    async fn test_spawn_missing_executable() {
        let runner = TokioRunner::default();
        let request = InvocationRequest::new("/definitely/not/a/real/scanner", vec![]);
        let err = runner.run(&request).await.unwrap_err();
        assert!(matches!(err, ScanError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_captures_streams_separately() {
        let runner = TokioRunner::default();
        let request = InvocationRequest::new(
            "sh",
            vec!["-c".into(), "printf out; printf err >&2; exit 3".into()],
        );
        let result = runner.run(&request).await.unwrap();
        assert_eq!(result.exit_code, Some(3));
        assert_eq!(result.stdout, b"out");
        assert_eq!(result.stderr, b"err");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_timeout_kills_child() {
        let runner = TokioRunner::new(Some(Duration::from_millis(200)));
        let request = InvocationRequest::new("sh", vec!["-c".into(), "sleep 30".into()]);
        let start = std::time::Instant::now();
        let err = runner.run(&request).await.unwrap_err();
        assert!(matches!(err, ScanError::Timeout(_)));
        assert!(start.elapsed() < Duration::from_secs(10));
    }
}
