//! Gazette Store Library
//!
//! This crate provides the persistence seam for issue records: the
//! `IssueStore` trait and its backends. The default backend is in-memory,
//! matching the archive's transient per-process state; a durable backend can
//! be added behind the same trait without touching the record-manager logic.

pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use memory::MemoryIssueStore;
pub use traits::{IssueStore, StoreError, StoreResult};
