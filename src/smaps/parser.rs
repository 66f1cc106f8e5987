/*!
 * Smaps Line Parser
 * Classifies report lines as mapping headers or counter fields
 *
 * Header lines look like:
 *
 * ```text
 * 7f80a7605000-7f80a7606000 r--p 0001e000 ca:01 1701113    /lib/x86_64-linux-gnu/libselinux.so.1
 * ```
 *
 * and are followed by counter lines such as `Rss:  40 kB`.
 */

use super::types::{MappingRecord, Permissions};
use crate::core::limits::{ANON_NAME, LIBRARY_SUFFIX, MAX_OBJECT_NAME_LEN, MIN_LIBRARY_NAME_LEN};
use crate::core::types::{Address, Kilobytes};
use thiserror::Error;

/// Non-numeric field emitted by newer kernels after the counters
const VM_FLAGS_FIELD: &str = "VmFlags";

/// A line did not match the grammar it was offered to
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("line does not match the expected grammar")]
pub struct NoMatch;

/// Parse a mapping header line into a new record
///
/// `previous` is the record built from the preceding header, used to
/// attribute nameless regions that directly follow a shared library to
/// that library's BSS. Returns `None` if the line is not a header.
pub fn parse_header(line: &str, previous: Option<&MappingRecord>) -> Option<MappingRecord> {
    let (range, rest) = next_field(line)?;
    let (start, end) = range.split_once('-')?;
    let start = parse_hex(start)?;
    let end = parse_hex(end)?;

    let (perms, rest) = next_field(rest)?;
    let permissions = Permissions::parse(perms)?;

    let (offset, rest) = next_field(rest)?;
    let offset = parse_hex(offset)?;

    // device (major:minor) and inode are validated, then discarded
    let (dev, rest) = next_field(rest)?;
    let (major, minor) = dev.split_once(':')?;
    parse_hex(major)?;
    parse_hex(minor)?;

    let (inode, rest) = next_field(rest)?;
    inode.parse::<u64>().ok()?;

    let name = rest.trim_start();
    let record = if !name.is_empty() {
        MappingRecord::new(start, end, offset, permissions, truncate_name(name), false)
    } else {
        match previous {
            Some(prev) if prev.end == start && is_library(&prev.name) => {
                MappingRecord::new(start, end, offset, permissions, prev.name.clone(), true)
            }
            _ => MappingRecord::new(start, end, offset, permissions, ANON_NAME, false),
        }
    };

    Some(record)
}

/// Apply a `<Field>: <value> kB` line to the record being built
///
/// Unknown field names are accepted and ignored. Returns [`NoMatch`] if the
/// line is not a counter line at all, leaving the record untouched.
pub fn parse_counter_field(record: &mut MappingRecord, line: &str) -> Result<(), NoMatch> {
    let (field, value) = split_counter_line(line).ok_or(NoMatch)?;
    let Some(value) = value else {
        return Ok(());
    };

    match field {
        "Size" => record.usage.size = value,
        "Rss" => record.usage.rss = value,
        "Pss" => record.usage.pss = value,
        "Shared_Clean" => record.usage.shared_clean = value,
        "Shared_Dirty" => record.usage.shared_dirty = value,
        "Private_Clean" => record.usage.private_clean = value,
        "Private_Dirty" => record.usage.private_dirty = value,
        "KernelPageSize" => record.kernel_page_size = value,
        _ => {}
    }

    Ok(())
}

/// Whether a name looks like a shared library path
///
/// Accepts `/path/libfoo.so` as well as versioned sonames such as
/// `/path/libfoo.so.1.2`.
pub fn is_library(name: &str) -> bool {
    if name.len() < MIN_LIBRARY_NAME_LEN || !name.starts_with('/') {
        return false;
    }

    let file = name.rsplit('/').next().unwrap_or(name);
    file.match_indices(LIBRARY_SUFFIX).any(|(idx, _)| {
        let version = &file[idx + LIBRARY_SUFFIX.len()..];
        version.is_empty()
            || version.strip_prefix('.').is_some_and(|v| {
                !v.is_empty() && v.bytes().all(|b| b.is_ascii_digit() || b == b'.')
            })
    })
}

/// Split `Field: value [kB]` into its name and value
///
/// The value is `None` for fields that carry no number (`VmFlags`).
fn split_counter_line(line: &str) -> Option<(&str, Option<Kilobytes>)> {
    let mut tokens = line.split_whitespace();
    let field = tokens.next()?.strip_suffix(':')?;
    if field.is_empty() {
        return None;
    }
    if field == VM_FLAGS_FIELD {
        return Some((field, None));
    }

    let value = tokens.next()?.parse::<Kilobytes>().ok()?;
    match (tokens.next(), tokens.next()) {
        (None, _) | (Some("kB"), None) => Some((field, Some(value))),
        _ => None,
    }
}

/// Next whitespace-delimited field and the unconsumed remainder
fn next_field(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(pos) => Some((&s[..pos], &s[pos..])),
        None => Some((s, "")),
    }
}

fn parse_hex(s: &str) -> Option<Address> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Address::from_str_radix(s, 16).ok()
}

/// Cut a name to `MAX_OBJECT_NAME_LEN` bytes without splitting a character
fn truncate_name(name: &str) -> String {
    if name.len() <= MAX_OBJECT_NAME_LEN {
        return name.to_string();
    }
    let mut cut = MAX_OBJECT_NAME_LEN;
    while !name.is_char_boundary(cut) {
        cut -= 1;
    }
    tracing::debug!(name, kept = cut, "object name truncated");
    name[..cut].to_string()
}
