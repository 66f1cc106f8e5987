/*!
 * Report Generation Tests
 * Full invocations against a fake procfs tree
 */

use pretty_assertions::assert_eq;
use procmem::{show, OutputFormat, ProcFsSource, ProcMemError, ReportConfig, SourceConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SAMPLE: &str = include_str!("../fixtures/smaps_sample.txt");
const PID: u32 = 4242;

fn fake_proc() -> TempDir {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join(PID.to_string());
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("smaps"), SAMPLE).unwrap();
    root
}

fn source_at(root: &Path) -> ProcFsSource {
    ProcFsSource::with_config(&SourceConfig {
        proc_root: root.to_path_buf(),
    })
}

fn run(config: &ReportConfig) -> (String, procmem::Totals) {
    let root = fake_proc();
    let mut out = Vec::new();
    let totals = show(&source_at(root.path()), PID, config, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), totals)
}

#[test]
fn test_grouped_report() {
    let (text, totals) = run(&ReportConfig::grouped());

    let lines: Vec<&str> = text.lines().collect();
    // two header lines, divider, six rows, divider, two header lines, divider, total
    assert_eq!(lines.len(), 14);
    assert!(lines[3].ends_with("/lib/x86_64-linux-gnu/libc.so.6"));
    assert!(lines[4].ends_with("/lib/x86_64-linux-gnu/libselinux.so.1 [bss]"));
    assert!(lines[13].ends_with("TOTAL"));
    assert!(lines[13].contains(" 2252 "));

    assert_eq!(totals.usage.size, 2252);
    assert_eq!(totals.count, 11);
}

#[test]
fn test_terse_report_keeps_totals() {
    let full = run(&ReportConfig::grouped()).1;
    let config = ReportConfig {
        terse: true,
        ..ReportConfig::grouped()
    };
    let (text, totals) = run(&config);

    assert!(!text.contains("libc.so.6"));
    assert!(text.contains("[heap]"));
    assert_eq!(totals, full);
}

#[test]
fn test_address_report_lists_every_region() {
    let (text, totals) = run(&ReportConfig::with_addresses());

    // eleven rows plus seven header, divider and total lines
    assert_eq!(text.lines().count(), 18);
    assert!(!text.contains(" # "));
    assert!(text.contains("7f80a7605000 7f80a7606000"));
    assert_eq!(totals.records, 11);
}

#[test]
fn test_json_report() {
    let config = ReportConfig {
        format: OutputFormat::Json,
        ..ReportConfig::grouped()
    };
    let (text, _) = run(&config);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["records"].as_array().unwrap().len(), 6);
    assert_eq!(value["totals"]["size"], 2252);
    assert_eq!(value["totals"]["count"], 11);
    assert_eq!(value["stats"]["headers"], 11);
    assert_eq!(value["records"][1]["bss"], 1);
}

#[test]
fn test_missing_process_writes_nothing() {
    let root = tempfile::tempdir().unwrap();
    let mut out = Vec::new();
    let result = show(&source_at(root.path()), 99999, &ReportConfig::grouped(), &mut out);

    assert!(matches!(result, Err(ProcMemError::SourceUnavailable { .. })));
    assert!(out.is_empty());
}
