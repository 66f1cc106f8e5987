/*!
 * Report Source
 * Acquisition of per-process smaps reports as line streams
 */

use super::config::SourceConfig;
use crate::core::errors::{ProcMemError, Result};
use crate::core::limits::{LINE_BUFFER_CAPACITY, SMAPS_FILE_NAME};
use crate::core::types::Pid;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Supplier of smaps report lines for a process
///
/// Failing to open the report is terminal for the invocation; a read error
/// in the middle of the stream is reported through the iterator and is
/// terminal too.
pub trait SmapsSource {
    type Lines: Iterator<Item = Result<String>>;

    /// Open the report of `pid`
    fn open(&self, pid: Pid) -> Result<Self::Lines>;
}

/// Reads `<proc_root>/<pid>/smaps`
#[derive(Debug, Clone)]
pub struct ProcFsSource {
    root: PathBuf,
}

impl ProcFsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn with_config(config: &SourceConfig) -> Self {
        Self::new(config.proc_root.clone())
    }

    /// Path of the report for `pid`
    pub fn report_path(&self, pid: Pid) -> PathBuf {
        self.root.join(pid.to_string()).join(SMAPS_FILE_NAME)
    }
}

impl Default for ProcFsSource {
    fn default() -> Self {
        Self::with_config(&SourceConfig::default())
    }
}

impl SmapsSource for ProcFsSource {
    type Lines = ReportLines<BufReader<File>>;

    fn open(&self, pid: Pid) -> Result<Self::Lines> {
        let path = self.report_path(pid);
        let file = File::open(&path).map_err(|e| ProcMemError::source_unavailable(&path, &e))?;
        debug!(path = %path.display(), "opened smaps report");
        Ok(ReportLines::new(BufReader::new(file), path))
    }
}

/// Line iterator over a report
///
/// Lines are decoded lossily so that mappings of non-UTF-8 paths still
/// parse; the trailing newline (and carriage return) is removed.
#[derive(Debug)]
pub struct ReportLines<R> {
    reader: R,
    path: PathBuf,
    buf: Vec<u8>,
    failed: bool,
}

impl<R: BufRead> ReportLines<R> {
    pub fn new(reader: R, path: impl AsRef<Path>) -> Self {
        Self {
            reader,
            path: path.as_ref().to_path_buf(),
            buf: Vec::with_capacity(LINE_BUFFER_CAPACITY),
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for ReportLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(ProcMemError::source_unavailable(&self.path, &e)))
            }
        }
    }
}
