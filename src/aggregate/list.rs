/*!
 * Mapping List
 * Ordered, optionally coalescing collection of mapping records
 *
 * Records are kept sorted as they are inserted. With coalescing enabled, a
 * record whose name matches a node already in the list is folded into the
 * first such node and dropped; the node keeps its position, so merges never
 * re-sort the list.
 */

use super::ordering::AggregationPolicy;
use super::totals::Totals;
use crate::smaps::types::MappingRecord;
use tracing::trace;

/// Outcome of [`MappingList::insert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// Folded into the existing record at `index`
    Merged { index: usize },
    /// Linked in as a new record at `index`
    Linked { index: usize },
}

/// Records of one report, in presentation order
#[derive(Debug, Default)]
pub struct MappingList {
    records: Vec<MappingRecord>,
}

impl MappingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a completed record
    pub fn insert(&mut self, record: MappingRecord, policy: AggregationPolicy) -> Insertion {
        let slot = self.records.iter().position(|node| {
            (policy.coalesce_by_name && node.name == record.name)
                || policy.order.before(&record, node)
        });

        match slot {
            Some(index) if policy.coalesce_by_name && self.records[index].name == record.name => {
                let node = &mut self.records[index];
                node.absorb(&record);
                trace!(name = %node.name, count = node.count, "coalesced mapping");
                Insertion::Merged { index }
            }
            Some(index) => {
                self.records.insert(index, record);
                Insertion::Linked { index }
            }
            None => {
                self.records.push(record);
                Insertion::Linked {
                    index: self.records.len() - 1,
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Peek at the records without consuming them
    pub fn iter(&self) -> std::slice::Iter<'_, MappingRecord> {
        self.records.iter()
    }

    /// Consume the list head to tail, accumulating totals on the way
    pub fn drain(self) -> Drain {
        Drain {
            inner: self.records.into_iter(),
            totals: Totals::default(),
        }
    }
}

/// Draining iterator over a [`MappingList`]
///
/// Each record is handed out exactly once and added to the running totals
/// as it is handed out. Records are released as the caller drops them.
#[derive(Debug)]
pub struct Drain {
    inner: std::vec::IntoIter<MappingRecord>,
    totals: Totals,
}

impl Drain {
    /// Totals of the records handed out so far
    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    /// Drain whatever is left and return the final totals
    pub fn finish(mut self) -> Totals {
        for _ in self.by_ref() {}
        self.totals
    }
}

impl Iterator for Drain {
    type Item = MappingRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.inner.next()?;
        self.totals.add(&record);
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Drain {}
