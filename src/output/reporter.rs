use crate::error::ScanError;
use colored::Colorize;
use std::io::{self, Write};

// =============================================================================
// Report (stdout)
// =============================================================================

/// Format the scanner report for printing. Empty reports print nothing;
/// otherwise a trailing newline is ensured. The bytes are never decoded.
#[must_use]
pub fn render_report(report: &[u8]) -> Vec<u8> {
    let mut out = report.to_vec();
    if !out.is_empty() && !out.ends_with(b"\n") {
        out.push(b'\n');
    }
    out
}

/// Relay the scanner report to stdout.
pub fn print_report(report: &[u8]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(&render_report(report))?;
    out.flush()
}

// =============================================================================
// Errors (stderr)
// =============================================================================

/// Format an error for the terminal. For a detected failure the scanner's
/// stderr is relayed, indented, under the failure message.
#[must_use]
pub fn render_error(err: &ScanError) -> String {
    let mut text = format!("{} {}", "Error:".red().bold(), err);

    if let ScanError::CommandFailed { stderr, .. } = err {
        for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
            text.push_str(&format!("\n  {}", line.dimmed()));
        }
    }

    if let ScanError::Usage(_) = err {
        text.push_str(&format!(
            "\n\nRun with {} for the full list of options.",
            "--help".bold()
        ));
    }

    text
}

pub fn print_error(err: &ScanError) {
    eprintln!("{}", render_error(err));
}
