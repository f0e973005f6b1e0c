use crate::traits::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance, creating the base directory if
    /// it does not exist yet (idempotent).
    ///
    /// # Arguments
    /// * `base_path` - Root directory for blob storage (e.g., "uploads")
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage { base_path })
    }

    /// Convert a blob filename to a filesystem path with validation.
    ///
    /// Blobs live flat in the base directory, so any path separator or
    /// traversal sequence in the filename is rejected. Filenames arrive from
    /// clients on the raw-serve route and must never escape the directory.
    fn blob_path(&self, filename: &str) -> StorageResult<PathBuf> {
        if filename.is_empty()
            || filename == "."
            || filename.contains("..")
            || filename.contains('/')
            || filename.contains('\\')
        {
            return Err(StorageError::InvalidKey(
                "Blob filename contains invalid characters".to_string(),
            ));
        }

        Ok(self.base_path.join(filename))
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn put(&self, filename: &str, data: Vec<u8>) -> StorageResult<()> {
        let path = self.blob_path(filename)?;
        let size = data.len();

        let mut file = fs::File::create(&path).await?;
        file.write_all(&data).await?;
        file.sync_all().await?;

        tracing::info!(
            path = %path.display(),
            size_bytes = size,
            "Local storage write successful"
        );

        Ok(())
    }

    async fn get(&self, filename: &str) -> StorageResult<Vec<u8>> {
        let path = self.blob_path(filename)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(filename.to_string()));
        }

        let data = fs::read(&path).await?;

        tracing::debug!(
            path = %path.display(),
            size_bytes = data.len(),
            "Local storage read successful"
        );

        Ok(data)
    }

    async fn delete(&self, filename: &str) -> StorageResult<()> {
        let path = self.blob_path(filename)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(());
        }

        fs::remove_file(&path).await?;

        tracing::info!(path = %path.display(), "Local storage delete successful");

        Ok(())
    }

    async fn exists(&self, filename: &str) -> StorageResult<bool> {
        let path = self.blob_path(filename)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }
}
