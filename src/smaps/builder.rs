/*!
 * Record Builder
 * Line-at-a-time state machine turning report lines into mapping records
 */

use super::parser::{parse_counter_field, parse_header};
use super::types::MappingRecord;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// Line accounting for one report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Lines offered to the builder
    pub lines: u64,
    /// Lines recognized as mapping headers
    pub headers: u64,
    /// Lines applied (or knowingly ignored) as counter fields
    pub fields: u64,
    /// Lines matching neither grammar, skipped
    pub malformed: u64,
}

/// Builds mapping records from a stream of report lines
///
/// Counter lines are tried first while a record is in progress; only a line
/// that is not a counter is considered as the next header. A line matching
/// neither is logged and skipped without touching the record in progress.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    current: Option<MappingRecord>,
    stats: ParseStats,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line, returning the record it completed, if any
    pub fn feed(&mut self, line: &str) -> Option<MappingRecord> {
        self.stats.lines += 1;

        if let Some(current) = self.current.as_mut() {
            if parse_counter_field(current, line).is_ok() {
                self.stats.fields += 1;
                return None;
            }
        }

        match parse_header(line, self.current.as_ref()) {
            Some(next) => {
                self.stats.headers += 1;
                trace!(start = next.start, end = next.end, name = %next.name, "mapping header");
                self.current.replace(next)
            }
            None => {
                self.stats.malformed += 1;
                warn!(
                    line_number = self.stats.lines,
                    line,
                    "could not parse map info line"
                );
                None
            }
        }
    }

    /// Record currently being filled by counter lines
    pub fn in_progress(&self) -> Option<&MappingRecord> {
        self.current.as_ref()
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// End of input: hand back the record in progress and the line accounting
    pub fn finish(self) -> (Option<MappingRecord>, ParseStats) {
        (self.current, self.stats)
    }
}
