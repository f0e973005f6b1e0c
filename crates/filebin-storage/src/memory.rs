//! In-memory storage backend for tests.

use crate::traits::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Keeps blobs in a map; behavior mirrors `LocalStorage` (delete of an
/// absent blob is Ok, get of an absent blob is NotFound).
#[derive(Clone, Default)]
pub struct MemoryStorage {
    blobs: Arc<RwLock<HashMap<String, Bytes>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn put(&self, filename: &str, data: Vec<u8>) -> StorageResult<()> {
        self.blobs
            .write()
            .await
            .insert(filename.to_string(), Bytes::from(data));
        Ok(())
    }

    async fn get(&self, filename: &str) -> StorageResult<Vec<u8>> {
        self.blobs
            .read()
            .await
            .get(filename)
            .map(|bytes| bytes.to_vec())
            .ok_or_else(|| StorageError::NotFound(filename.to_string()))
    }

    async fn delete(&self, filename: &str) -> StorageResult<()> {
        self.blobs.write().await.remove(filename);
        Ok(())
    }

    async fn exists(&self, filename: &str) -> StorageResult<bool> {
        Ok(self.blobs.read().await.contains_key(filename))
    }
}
