/*!
 * Smaps Module
 * Parsing of /proc/<pid>/smaps reports into mapping records
 */

pub mod builder;
pub mod config;
pub mod parser;
pub mod source;
pub mod types;

// Re-export for convenience
pub use builder::{ParseStats, RecordBuilder};
pub use config::SourceConfig;
pub use parser::{is_library, parse_counter_field, parse_header, NoMatch};
pub use source::{ProcFsSource, ReportLines, SmapsSource};
pub use types::{MappingRecord, Permissions, UsageCounters};
