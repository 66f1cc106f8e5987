/*!
 * Record Ordering
 * The two total orders the aggregation engine can maintain
 */

use crate::smaps::types::MappingRecord;
use serde::{Deserialize, Serialize};

/// Order of records in a [`MappingList`](super::MappingList)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// By start address, then end address
    Address,
    /// Lexicographically by object name
    #[default]
    Name,
}

impl SortOrder {
    /// Whether `a` belongs strictly before `b`
    #[inline]
    pub fn before(self, a: &MappingRecord, b: &MappingRecord) -> bool {
        match self {
            SortOrder::Address => a.start < b.start || (a.start == b.start && a.end < b.end),
            SortOrder::Name => a.name < b.name,
        }
    }
}

/// How records are combined when inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationPolicy {
    pub order: SortOrder,
    /// Merge records that share an object name
    pub coalesce_by_name: bool,
}

impl AggregationPolicy {
    pub const fn new(sort_by_address: bool, coalesce_by_name: bool) -> Self {
        Self {
            order: if sort_by_address {
                SortOrder::Address
            } else {
                SortOrder::Name
            },
            coalesce_by_name,
        }
    }

    /// One record per object, ordered by name
    pub const fn grouped() -> Self {
        Self::new(false, true)
    }

    /// One record per region, ordered by address
    pub const fn by_address() -> Self {
        Self::new(true, false)
    }

    pub fn sort_by_address(&self) -> bool {
        self.order == SortOrder::Address
    }
}

impl Default for AggregationPolicy {
    fn default() -> Self {
        Self::grouped()
    }
}
