/*!
 * Core Types
 * Common types used across the crate
 */

/// Process ID type
pub type Pid = u32;

/// Virtual address or file offset as reported by the kernel
pub type Address = u64;

/// Usage counter value, in kilobytes as reported by the kernel
pub type Kilobytes = u64;
