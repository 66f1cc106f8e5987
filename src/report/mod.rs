/*!
 * Report Module
 * One report generation: load, aggregate, render
 */

pub mod config;
pub mod render;

pub use config::{OutputFormat, ReportConfig};
pub use render::{render_json, render_table, JsonReport};

use crate::aggregate::{load_maps, Totals};
use crate::core::errors::Result;
use crate::core::types::Pid;
use crate::smaps::source::SmapsSource;
use std::io::Write;
use tracing::info;

/// Produce the memory report of `pid` on `out`
///
/// Nothing is written if the report cannot be acquired.
pub fn show<S, W>(source: &S, pid: Pid, config: &ReportConfig, out: &mut W) -> Result<Totals>
where
    S: SmapsSource,
    W: Write,
{
    let loaded = load_maps(source, pid, config.policy())?;
    let stats = loaded.stats;

    let totals = match config.format {
        OutputFormat::Table => render_table(out, loaded.list, config)?,
        OutputFormat::Json => render_json(out, loaded, config)?,
    };

    info!(
        pid,
        records = totals.records,
        regions = totals.count,
        rss_kb = totals.usage.rss,
        pss_kb = totals.usage.pss,
        skipped_lines = stats.malformed,
        "report generated"
    );
    Ok(totals)
}
