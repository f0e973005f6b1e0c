//! In-memory document store for tests.

use crate::traits::{MetadataResult, MetadataStore};
use async_trait::async_trait;
use filebin_core::FileRecord;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Holds the record sequence in memory; `init` is a no-op (there is no
/// document to create).
#[derive(Clone, Default)]
pub struct MemoryDocumentStore {
    records: Arc<RwLock<Vec<FileRecord>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MetadataStore for MemoryDocumentStore {
    async fn read_all(&self) -> MetadataResult<Vec<FileRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn write_all(&self, records: &[FileRecord]) -> MetadataResult<()> {
        *self.records.write().await = records.to_vec();
        Ok(())
    }

    async fn init(&self) -> MetadataResult<()> {
        Ok(())
    }
}
