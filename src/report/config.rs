/*!
 * Report Configuration
 *
 * Display modes selected on the command line, and the aggregation policy
 * they imply
 */

use crate::aggregate::AggregationPolicy;
use serde::{Deserialize, Serialize};

/// Output encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Column layout for terminals
    #[default]
    Table,
    /// Records and totals as one JSON document
    Json,
}

/// Report configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// One row per region instead of one per object
    pub verbose: bool,
    /// Only show rows with private dirty memory (totals still cover everything)
    pub terse: bool,
    /// Show address ranges, ordered by address (implies one row per region)
    pub addresses: bool,
    pub format: OutputFormat,
}

impl ReportConfig {
    /// One row per object, ordered by name
    pub const fn grouped() -> Self {
        Self {
            verbose: false,
            terse: false,
            addresses: false,
            format: OutputFormat::Table,
        }
    }

    /// One row per region with its address range
    pub const fn with_addresses() -> Self {
        Self {
            verbose: false,
            terse: false,
            addresses: true,
            format: OutputFormat::Table,
        }
    }

    pub fn sort_by_address(&self) -> bool {
        self.addresses
    }

    pub fn coalesce_by_name(&self) -> bool {
        !self.verbose && !self.addresses
    }

    /// Aggregation policy implied by the display modes
    pub fn policy(&self) -> AggregationPolicy {
        AggregationPolicy::new(self.sort_by_address(), self.coalesce_by_name())
    }

    /// Whether rows carry the number of regions folded into them
    pub fn shows_count(&self) -> bool {
        self.coalesce_by_name()
    }
}
