/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use miette::Diagnostic;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort a report for one process
///
/// Malformed report lines are not represented here: they are logged and
/// skipped by the record builder.
#[derive(Error, Debug, Diagnostic)]
pub enum ProcMemError {
    #[error("can not open {}: {reason}", .path.display())]
    #[diagnostic(
        code(procmem::source_unavailable),
        help("The process may have exited, or you may lack permission to read its memory map.")
    )]
    SourceUnavailable {
        path: PathBuf,
        kind: io::ErrorKind,
        reason: String,
    },

    #[error("Invalid PID \"{0}\"")]
    #[diagnostic(
        code(procmem::invalid_pid),
        help("Pass the decimal id of a running process, e.g. `procmem -p $$`.")
    )]
    InvalidPid(String),

    #[error("Failed to write report: {0}")]
    #[diagnostic(
        code(procmem::render_failed),
        help("Standard output was closed or is not writable.")
    )]
    Render(String),
}

impl ProcMemError {
    /// Wrap an I/O failure on the report file
    pub fn source_unavailable(path: impl AsRef<Path>, err: &io::Error) -> Self {
        ProcMemError::SourceUnavailable {
            path: path.as_ref().to_path_buf(),
            kind: err.kind(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ProcMemError {
    fn from(err: serde_json::Error) -> Self {
        ProcMemError::Render(err.to_string())
    }
}

/// Result type for procmem operations
pub type Result<T> = std::result::Result<T, ProcMemError>;
