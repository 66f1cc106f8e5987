/*!
 * Totals
 * Running accumulation across drained records
 */

use crate::smaps::types::{MappingRecord, UsageCounters};
use serde::{Deserialize, Serialize};

/// Sum of every usage counter and region count seen during a drain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    #[serde(flatten)]
    pub usage: UsageCounters,
    /// Number of original regions
    pub count: u64,
    /// Number of records accumulated
    pub records: u64,
}

impl Totals {
    pub fn add(&mut self, record: &MappingRecord) {
        self.usage.merge(&record.usage);
        self.count += u64::from(record.count);
        self.records += 1;
    }
}
