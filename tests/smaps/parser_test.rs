/*!
 * Header and Counter Parsing Tests
 */

use pretty_assertions::assert_eq;
use procmem::smaps::{parse_counter_field, parse_header, MappingRecord, NoMatch, Permissions};
use proptest::prelude::*;

const LIBSELINUX: &str = "/lib/x86_64-linux-gnu/libselinux.so.1";

fn libselinux_data() -> MappingRecord {
    parse_header(
        "7f80a7604000-7f80a7605000 r--p 0001d000 ca:01 1701113                    /lib/x86_64-linux-gnu/libselinux.so.1",
        None,
    )
    .unwrap()
}

#[test]
fn test_bss_continuation_of_libselinux() {
    let prev = libselinux_data();
    assert_eq!(prev.end, 0x7f80a7605000);

    let record =
        parse_header("7f80a7605000-7f80a7606000 r--p 0001e000 ca:01 1701113", Some(&prev)).unwrap();

    assert_eq!(record.name, LIBSELINUX);
    assert!(record.is_bss());
    assert_eq!(record.start, 0x7f80a7605000);
    assert_eq!(record.end, 0x7f80a7606000);
    assert_eq!(record.offset, 0x1e000);
    assert_eq!(record.permissions, Permissions::parse("r--p").unwrap());
}

#[test]
fn test_anonymous_region() {
    let record = parse_header("7f80a79c5000-7f80a79d2000 rw-p 00000000 00:00 0", None).unwrap();
    assert_eq!(record.name, "[anon]");
    assert!(!record.is_bss());
    assert_eq!(record.count, 1);
}

#[test]
fn test_header_with_too_few_fields_is_rejected() {
    for line in [
        "00400000-0040b000",
        "00400000-0040b000 r-xp",
        "00400000-0040b000 r-xp 00000000",
        "00400000-0040b000 r-xp 00000000 08:02",
    ] {
        assert!(parse_header(line, None).is_none(), "{line}");
    }
}

#[test]
fn test_header_line_rejected_as_counter() {
    let mut record = libselinux_data();
    assert_eq!(parse_counter_field(&mut record, "Private_Dirty:        4 kB"), Ok(()));
    assert_eq!(record.usage.private_dirty, 4);
    assert_eq!(
        parse_counter_field(&mut record, "7f80a7605000-7f80a7606000 r--p 0001e000 ca:01 1701113"),
        Err(NoMatch)
    );
}

fn perms_strategy() -> impl Strategy<Value = String> {
    ("[r-]", "[w-]", "[x-]", "[ps]").prop_map(|(r, w, x, s)| format!("{r}{w}{x}{s}"))
}

proptest! {
    #[test]
    fn prop_valid_headers_round_trip_fields(
        start in 0u64..0x7fff_ffff_0000,
        len in 1u64..0x1_0000_0000,
        offset in any::<u32>(),
        inode in any::<u32>(),
        perms in perms_strategy(),
        name in proptest::option::of("/[a-z]{1,20}(/[a-z0-9_.]{1,20}){0,3}"),
    ) {
        let end = start + len;
        let mut line = format!("{start:08x}-{end:08x} {perms} {offset:08x} fd:01 {inode}");
        if let Some(name) = &name {
            line.push_str("                 ");
            line.push_str(name);
        }

        let record = parse_header(&line, None).unwrap();
        prop_assert!(record.start < record.end);
        prop_assert_eq!(record.start, start);
        prop_assert_eq!(record.end, end);
        prop_assert_eq!(record.offset, u64::from(offset));
        prop_assert_eq!(record.permissions.as_str(), perms.as_str());
        prop_assert_eq!(record.name.as_str(), name.as_deref().unwrap_or("[anon]"));
    }

    #[test]
    fn prop_counter_lines_never_parse_as_headers(
        field in "[A-Z][A-Za-z_]{0,15}",
        value in any::<u32>(),
    ) {
        let line = format!("{field}:  {value} kB");
        prop_assert!(parse_header(&line, None).is_none());
    }
}
