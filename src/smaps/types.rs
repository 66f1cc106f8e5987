/*!
 * Smaps Types
 * Mapping records and the usage counters they carry
 */

use crate::core::types::{Address, Kilobytes};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::AddAssign;

/// Access flags of a mapping, e.g. `r-xp`
///
/// Always four characters: read, write, execute, then `p` (private) or
/// `s` (shared).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Permissions([u8; 4]);

impl Permissions {
    /// Parse the permissions column of a header line
    pub fn parse(s: &str) -> Option<Self> {
        let bytes: [u8; 4] = s.as_bytes().try_into().ok()?;
        let valid = matches!(bytes[0], b'r' | b'-')
            && matches!(bytes[1], b'w' | b'-')
            && matches!(bytes[2], b'x' | b'-')
            && matches!(bytes[3], b'p' | b's');
        valid.then_some(Self(bytes))
    }

    pub fn readable(&self) -> bool {
        self.0[0] == b'r'
    }

    pub fn writable(&self) -> bool {
        self.0[1] == b'w'
    }

    pub fn executable(&self) -> bool {
        self.0[2] == b'x'
    }

    pub fn shared(&self) -> bool {
        self.0[3] == b's'
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII flag characters are ever stored
        std::str::from_utf8(&self.0).unwrap_or("----")
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Permissions> for String {
    fn from(perms: Permissions) -> Self {
        perms.as_str().to_string()
    }
}

impl TryFrom<String> for Permissions {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Permissions::parse(&s).ok_or_else(|| format!("invalid permissions: {s}"))
    }
}

/// Summable usage counters of a mapping, in kilobytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageCounters {
    pub size: Kilobytes,
    pub rss: Kilobytes,
    pub pss: Kilobytes,
    pub shared_clean: Kilobytes,
    pub shared_dirty: Kilobytes,
    pub private_clean: Kilobytes,
    pub private_dirty: Kilobytes,
}

impl UsageCounters {
    /// Add every counter of `other` into `self`
    pub fn merge(&mut self, other: &UsageCounters) {
        self.size += other.size;
        self.rss += other.rss;
        self.pss += other.pss;
        self.shared_clean += other.shared_clean;
        self.shared_dirty += other.shared_dirty;
        self.private_clean += other.private_clean;
        self.private_dirty += other.private_dirty;
    }

    /// Counters in report column order
    pub fn columns(&self) -> [Kilobytes; 7] {
        [
            self.size,
            self.rss,
            self.pss,
            self.shared_clean,
            self.shared_dirty,
            self.private_clean,
            self.private_dirty,
        ]
    }
}

impl AddAssign<&UsageCounters> for UsageCounters {
    fn add_assign(&mut self, rhs: &UsageCounters) {
        self.merge(rhs);
    }
}

/// One memory mapping, or several mappings of the same object after coalescing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRecord {
    pub start: Address,
    pub end: Address,
    pub offset: Address,
    pub permissions: Permissions,
    pub name: String,
    #[serde(flatten)]
    pub usage: UsageCounters,
    /// Informational, kept from the first region on merge
    pub kernel_page_size: Kilobytes,
    /// Number of regions folded into this record
    pub count: u32,
    /// Number of folded regions attributed as a library's BSS
    pub bss: u32,
}

impl MappingRecord {
    /// Create a record for a freshly parsed header, counters zeroed
    pub fn new(
        start: Address,
        end: Address,
        offset: Address,
        permissions: Permissions,
        name: impl Into<String>,
        bss: bool,
    ) -> Self {
        Self {
            start,
            end,
            offset,
            permissions,
            name: name.into(),
            usage: UsageCounters::default(),
            kernel_page_size: 0,
            count: 1,
            bss: u32::from(bss),
        }
    }

    /// Fold another record of the same object into this one
    ///
    /// Addresses, offset, permissions and page size stay those of `self`.
    pub fn absorb(&mut self, other: &MappingRecord) {
        self.usage.merge(&other.usage);
        self.count += other.count;
        self.bss += other.bss;
    }

    pub fn is_bss(&self) -> bool {
        self.bss > 0
    }

    /// Object name as displayed, with the BSS marker when applicable
    pub fn display_name(&self) -> String {
        if self.is_bss() {
            format!("{}{}", self.name, crate::core::limits::BSS_SUFFIX)
        } else {
            self.name.clone()
        }
    }
}
