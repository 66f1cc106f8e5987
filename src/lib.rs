/*!
 * procmem Library
 * Per-object memory usage breakdown of a process from /proc/<pid>/smaps
 *
 * Report lines flow through the [`smaps`] record builder into the
 * [`aggregate`] mapping list, which [`report`] drains to render rows and
 * accumulate totals.
 */

pub mod aggregate;
pub mod core;
pub mod monitoring;
pub mod report;
pub mod smaps;

// Re-exports
pub use aggregate::{
    collect_maps, load_maps, AggregationPolicy, LoadedMaps, MappingList, SortOrder, Totals,
};
pub use crate::core::errors::{ProcMemError, Result};
pub use crate::core::types::{Address, Kilobytes, Pid};
pub use monitoring::init_tracing;
pub use report::{show, OutputFormat, ReportConfig};
pub use smaps::{
    MappingRecord, ParseStats, Permissions, ProcFsSource, RecordBuilder, SmapsSource,
    SourceConfig, UsageCounters,
};
