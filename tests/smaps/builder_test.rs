/*!
 * Record Builder Tests
 * State machine behaviour over realistic report text
 */

use pretty_assertions::assert_eq;
use procmem::smaps::{ParseStats, RecordBuilder};

const SAMPLE: &str = include_str!("../fixtures/smaps_sample.txt");

fn build_all(text: &str) -> (Vec<procmem::MappingRecord>, ParseStats) {
    let mut builder = RecordBuilder::new();
    let mut records: Vec<_> = text.lines().filter_map(|line| builder.feed(line)).collect();
    let (last, stats) = builder.finish();
    records.extend(last);
    (records, stats)
}

#[test]
fn test_sample_builds_every_region() {
    let (records, stats) = build_all(SAMPLE);

    assert_eq!(records.len(), 11);
    assert_eq!(
        stats,
        ParseStats {
            lines: 198,
            headers: 11,
            fields: 187,
            malformed: 0,
        }
    );
}

#[test]
fn test_sample_bss_and_anon_attribution() {
    let (records, _) = build_all(SAMPLE);

    // follows libselinux without a gap
    assert_eq!(records[6].name, "/lib/x86_64-linux-gnu/libselinux.so.1");
    assert_eq!(records[6].bss, 1);

    // follows libc with a gap
    assert_eq!(records[9].name, "[anon]");
    assert_eq!(records[9].bss, 0);
}

#[test]
fn test_sample_counters() {
    let (records, _) = build_all(SAMPLE);
    let libc_text = &records[8];

    assert_eq!(libc_text.name, "/lib/x86_64-linux-gnu/libc.so.6");
    assert_eq!(libc_text.usage.columns(), [1620, 900, 30, 900, 0, 0, 0]);
    assert_eq!(libc_text.kernel_page_size, 4);
    assert_eq!(libc_text.permissions.as_str(), "r-xp");
}

#[test]
fn test_malformed_lines_do_not_disturb_counters() {
    let text = "\
1000-2000 rw-p 00000000 00:00 0
Size:                 4 kB
1000-2000 rw-p
Rss:                  4 kB
this is not a smaps line
Pss:                  2 kB
";
    let (records, stats) = build_all(text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].usage.size, 4);
    assert_eq!(records[0].usage.rss, 4);
    assert_eq!(records[0].usage.pss, 2);
    assert_eq!(stats.malformed, 2);
    assert_eq!(stats.headers, 1);
}
