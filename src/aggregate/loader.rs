/*!
 * Map Loader
 * Drives report lines through the record builder into a mapping list
 */

use super::list::MappingList;
use super::ordering::AggregationPolicy;
use crate::core::errors::Result;
use crate::core::types::Pid;
use crate::smaps::builder::{ParseStats, RecordBuilder};
use crate::smaps::source::SmapsSource;
use tracing::{debug, info_span};

/// Aggregated records of one report, with its line accounting
#[derive(Debug)]
pub struct LoadedMaps {
    pub list: MappingList,
    pub stats: ParseStats,
}

/// Streaming pipeline from lines to an aggregated list
#[derive(Debug)]
struct Loader {
    builder: RecordBuilder,
    list: MappingList,
    policy: AggregationPolicy,
}

impl Loader {
    fn new(policy: AggregationPolicy) -> Self {
        Self {
            builder: RecordBuilder::new(),
            list: MappingList::new(),
            policy,
        }
    }

    fn push(&mut self, line: &str) {
        if let Some(done) = self.builder.feed(line) {
            self.list.insert(done, self.policy);
        }
    }

    fn finish(self) -> LoadedMaps {
        let Loader {
            builder,
            mut list,
            policy,
        } = self;

        let (last, stats) = builder.finish();
        if let Some(done) = last {
            list.insert(done, policy);
        }

        debug!(
            headers = stats.headers,
            malformed = stats.malformed,
            records = list.len(),
            "maps loaded"
        );
        LoadedMaps { list, stats }
    }
}

/// Build and aggregate records from already acquired lines
pub fn collect_maps<I, S>(lines: I, policy: AggregationPolicy) -> LoadedMaps
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut loader = Loader::new(policy);
    for line in lines {
        loader.push(line.as_ref());
    }
    loader.finish()
}

/// Read and aggregate the report of `pid`
///
/// Any failure to acquire or read the report aborts the load; no partial
/// list is returned.
pub fn load_maps<S: SmapsSource>(
    source: &S,
    pid: Pid,
    policy: AggregationPolicy,
) -> Result<LoadedMaps> {
    let span = info_span!("load_maps", pid, sort_by_address = policy.sort_by_address());
    let _entered = span.enter();

    let mut loader = Loader::new(policy);
    for line in source.open(pid)? {
        loader.push(&line?);
    }
    Ok(loader.finish())
}
