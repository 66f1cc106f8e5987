/*!
 * Aggregation Module
 * Ordering, coalescing and totals over mapping records
 */

pub mod list;
pub mod loader;
pub mod ordering;
pub mod totals;

// Re-export for convenience
pub use list::{Drain, Insertion, MappingList};
pub use loader::{collect_maps, load_maps, LoadedMaps};
pub use ordering::{AggregationPolicy, SortOrder};
pub use totals::Totals;
