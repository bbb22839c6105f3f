use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("{0}")]
    Usage(String),

    #[error("could not find \"{0}\" executable in PATH")]
    RuntimeNotFound(String),

    #[error("could not find plugin resources directory (tried {})", display_paths(.0))]
    ResourcesNotFound(Vec<PathBuf>),

    #[error("failed to start {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("scanner exited with code {0}")]
    ExitCode(i32),

    #[error("scanner was terminated by a signal")]
    Terminated,

    #[error("scanner did not finish within {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("{message}")]
    CommandFailed { message: String, stderr: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    /// Process exit code the binary reports for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            ScanError::Usage(_) => 2,
            _ => 1,
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, ScanError>;
