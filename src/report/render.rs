/*!
 * Report Rendering
 * Column and JSON presentation of drained mapping records
 *
 * Rendering drains the list: every record is added to the totals exactly
 * once, whether or not terse mode shows its row.
 */

use super::config::ReportConfig;
use crate::aggregate::{LoadedMaps, MappingList, Totals};
use crate::core::errors::{ProcMemError, Result};
use crate::smaps::builder::ParseStats;
use crate::smaps::types::{MappingRecord, UsageCounters};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;

const COUNTER_WIDTH: usize = 8;
const ADDRESS_WIDTH: usize = 12;
const COUNT_WIDTH: usize = 4;
const OBJECT_DIVIDER_WIDTH: usize = 36;
const GAP: &str = "    ";

const LABELS_TOP: [&str; 7] = ["virtual", "", "", "shared", "shared", "private", "private"];
const LABELS_BOTTOM: [&str; 7] = ["size", "RSS", "PSS", "clean", "dirty", "clean", "dirty"];

/// Whether a drained record gets a row
fn is_shown(record: &MappingRecord, config: &ReportConfig) -> bool {
    !config.terse || record.usage.private_dirty != 0
}

/// Render the column report, returning the totals
pub fn render_table<W: Write>(
    out: &mut W,
    list: MappingList,
    config: &ReportConfig,
) -> Result<Totals> {
    let table = Table { config };
    let mut text = String::new();

    table.header(&mut text);
    table.divider(&mut text);

    let mut drain = list.drain();
    for record in drain.by_ref() {
        if is_shown(&record, config) {
            table.row(&mut text, &record);
        }
    }
    let totals = drain.finish();

    table.divider(&mut text);
    table.header(&mut text);
    table.divider(&mut text);
    table.totals(&mut text, &totals);

    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| ProcMemError::Render(e.to_string()))?;
    Ok(totals)
}

/// JSON document produced by `--json`
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub records: Vec<MappingRecord>,
    pub totals: Totals,
    pub stats: ParseStats,
}

/// Render records and totals as one JSON document, returning the totals
pub fn render_json<W: Write>(
    out: &mut W,
    loaded: LoadedMaps,
    config: &ReportConfig,
) -> Result<Totals> {
    let LoadedMaps { list, stats } = loaded;

    let mut drain = list.drain();
    let records: Vec<MappingRecord> = drain.by_ref().filter(|r| is_shown(r, config)).collect();
    let totals = drain.finish();

    let report = JsonReport {
        records,
        totals,
        stats,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out).map_err(|e| ProcMemError::Render(e.to_string()))?;
    Ok(totals)
}

/// Column layout for one configuration
struct Table<'a> {
    config: &'a ReportConfig,
}

impl Table<'_> {
    fn header(&self, text: &mut String) {
        let mut top = String::new();
        let mut bottom = String::new();

        if self.config.addresses {
            let _ = write!(top, "{:>w$} {:>w$} ", "start", "end", w = ADDRESS_WIDTH);
            let _ = write!(bottom, "{:>w$} {:>w$} ", "addr", "addr", w = ADDRESS_WIDTH);
        }
        top.push_str(&counter_cells(LABELS_TOP));
        bottom.push_str(&counter_cells(LABELS_BOTTOM));
        bottom.push_str(GAP);
        if self.config.shows_count() {
            let _ = write!(bottom, "{:>w$} {GAP}", "#", w = COUNT_WIDTH);
        }
        bottom.push_str("object");

        text.push_str(top.trim_end());
        text.push('\n');
        text.push_str(&bottom);
        text.push('\n');
    }

    fn divider(&self, text: &mut String) {
        if self.config.addresses {
            let dashes = "-".repeat(ADDRESS_WIDTH);
            let _ = write!(text, "{dashes} {dashes} ");
        }
        text.push_str(&"-".repeat(COUNTER_WIDTH * 7 + 6));
        text.push_str(GAP);
        if self.config.shows_count() {
            let _ = write!(text, "{} {GAP}", "-".repeat(COUNT_WIDTH));
        }
        text.push_str(&"-".repeat(OBJECT_DIVIDER_WIDTH));
        text.push('\n');
    }

    fn row(&self, text: &mut String, record: &MappingRecord) {
        if self.config.addresses {
            let _ = write!(
                text,
                "{:>w$} {:>w$} ",
                format!("{:08x}", record.start),
                format!("{:08x}", record.end),
                w = ADDRESS_WIDTH
            );
        }
        text.push_str(&counter_values(&record.usage));
        text.push_str(GAP);
        if self.config.shows_count() {
            let _ = write!(text, "{:>w$} {GAP}", record.count, w = COUNT_WIDTH);
        }
        text.push_str(&record.display_name());
        text.push('\n');
    }

    fn totals(&self, text: &mut String, totals: &Totals) {
        if self.config.addresses {
            text.push_str(&" ".repeat(ADDRESS_WIDTH * 2 + 2));
        }
        text.push_str(&counter_values(&totals.usage));
        text.push_str(GAP);
        if self.config.shows_count() {
            let _ = write!(text, "{:>w$} {GAP}", totals.count, w = COUNT_WIDTH);
        }
        text.push_str("TOTAL\n");
    }
}

fn counter_cells(labels: [&str; 7]) -> String {
    labels
        .iter()
        .map(|label| format!("{:>w$}", label, w = COUNTER_WIDTH))
        .collect::<Vec<_>>()
        .join(" ")
}

fn counter_values(usage: &UsageCounters) -> String {
    usage
        .columns()
        .iter()
        .map(|value| format!("{:>w$}", value, w = COUNTER_WIDTH))
        .collect::<Vec<_>>()
        .join(" ")
}
