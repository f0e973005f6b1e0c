//! Flat-file JSON document store.

use crate::traits::{MetadataError, MetadataResult, MetadataStore};
use async_trait::async_trait;
use filebin_core::FileRecord;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

/// Metadata document persisted as a single pretty-printed JSON array.
///
/// Every mutation rewrites the whole file in one `write`. There is no
/// partial-write protection beyond what the filesystem offers; a crash
/// mid-write can leave the document corrupt, which the next read reports as
/// `MetadataError::Corrupt`.
pub struct JsonDocumentStore {
    path: PathBuf,
}

impl JsonDocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonDocumentStore { path: path.into() }
    }
}

#[async_trait]
impl MetadataStore for JsonDocumentStore {
    async fn read_all(&self) -> MetadataResult<Vec<FileRecord>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_slice(&bytes).map_err(MetadataError::Corrupt)
    }

    async fn write_all(&self, records: &[FileRecord]) -> MetadataResult<()> {
        let bytes = serde_json::to_vec_pretty(records).map_err(MetadataError::Corrupt)?;
        fs::write(&self.path, bytes).await?;

        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            "Metadata document written"
        );

        Ok(())
    }

    async fn init(&self) -> MetadataResult<()> {
        if fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(());
        }

        self.write_all(&[]).await?;
        tracing::info!(path = %self.path.display(), "Created empty metadata document");
        Ok(())
    }
}
