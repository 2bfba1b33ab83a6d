//! Store abstraction trait
//!
//! This module defines the IssueStore trait that all record-store backends
//! must implement.

use async_trait::async_trait;
use gazette_core::models::IssueRecord;
use thiserror::Error;
use uuid::Uuid;

/// Store operation errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(Uuid),

    #[error("Store backend error: {0}")]
    BackendError(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record-store abstraction.
///
/// Backends hold the ordered collection of issue records. Ordering is
/// insertion order and must survive removals: deleting one record never
/// changes the relative order of the remainder.
#[async_trait]
pub trait IssueStore: Send + Sync {
    /// Append a record to the end of the collection.
    async fn append(&self, record: IssueRecord) -> StoreResult<()>;

    /// All records in insertion order.
    async fn list(&self) -> StoreResult<Vec<IssueRecord>>;

    /// Look up a single record by id.
    async fn get(&self, id: Uuid) -> StoreResult<Option<IssueRecord>>;

    /// Remove the record with the given id. Returns false when no such
    /// record exists; absence is not an error.
    async fn remove(&self, id: Uuid) -> StoreResult<bool>;

    /// Number of records currently held.
    async fn count(&self) -> StoreResult<usize>;
}
