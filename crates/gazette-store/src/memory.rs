//! In-memory store backend
//!
//! Holds the collection in a `tokio::sync::RwLock<Vec<_>>`. The collection
//! lives for the lifetime of the process; nothing is persisted across
//! restarts. This matches the archive's session-scoped semantics and is the
//! default backend.

use async_trait::async_trait;
use gazette_core::models::IssueRecord;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::traits::{IssueStore, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryIssueStore {
    records: RwLock<Vec<IssueRecord>>,
}

impl MemoryIssueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IssueStore for MemoryIssueStore {
    async fn append(&self, record: IssueRecord) -> StoreResult<()> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<IssueRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> StoreResult<Option<IssueRecord>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn remove(&self, id: Uuid) -> StoreResult<bool> {
        let mut records = self.records.write().await;
        let before = records.len();
        // Vec::retain keeps the relative order of the remainder
        records.retain(|r| r.id != id);
        Ok(records.len() < before)
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.records.read().await.len())
    }
}
