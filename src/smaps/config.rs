/*!
 * Source Configuration
 *
 * Where per-process reports are read from
 */

use crate::core::limits::{DEFAULT_PROC_ROOT, PROC_ROOT_ENV};
use std::path::PathBuf;

/// Report source configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// procfs mount point
    pub proc_root: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            proc_root: PathBuf::from(DEFAULT_PROC_ROOT),
        }
    }
}

impl SourceConfig {
    /// Configuration from the environment
    ///
    /// Environment variables:
    /// - PROCMEM_PROC_ROOT: procfs mount point (default: /proc)
    pub fn from_env() -> Self {
        match std::env::var_os(PROC_ROOT_ENV) {
            Some(root) if !root.is_empty() => Self {
                proc_root: PathBuf::from(root),
            },
            _ => Self::default(),
        }
    }
}
