/*!
 * Limits and Constants
 *
 * Names, sizes and markers shared by the parser, the aggregation engine
 * and the report renderer.
 */

// =============================================================================
// OBJECT NAMES
// =============================================================================

/// Longest object name kept for a mapping, in bytes
/// Longer names are truncated on a character boundary, never rejected
pub const MAX_OBJECT_NAME_LEN: usize = 127;

/// Synthetic name for a mapping without backing file or library predecessor
pub const ANON_NAME: &str = "[anon]";

/// Suffix appended to an object name when part of it was attributed as BSS
pub const BSS_SUFFIX: &str = " [bss]";

/// Minimum length of a name that can look like a shared library ("/.so")
pub const MIN_LIBRARY_NAME_LEN: usize = 4;

/// Shared library file suffix
pub const LIBRARY_SUFFIX: &str = ".so";

// =============================================================================
// SOURCE
// =============================================================================

/// Default procfs mount point
pub const DEFAULT_PROC_ROOT: &str = "/proc";

/// Per-process report file name under `<proc_root>/<pid>/`
pub const SMAPS_FILE_NAME: &str = "smaps";

/// Environment variable overriding the procfs mount point
pub const PROC_ROOT_ENV: &str = "PROCMEM_PROC_ROOT";

/// Initial capacity of the line buffer used while reading a report
/// Matches the line length the kernel practically emits for smaps
pub const LINE_BUFFER_CAPACITY: usize = 1024;
