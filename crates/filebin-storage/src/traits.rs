//! Storage abstraction trait
//!
//! This module defines the Storage trait that all blob backends implement.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Blob not found: {0}")]
    NotFound(String),

    #[error("Invalid blob filename: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Blob storage abstraction
///
/// Backends store raw uploaded bytes under flat filenames. The router is
/// constructed against this trait so tests can substitute an in-memory
/// backend for the filesystem one.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write a blob under the given filename, overwriting any existing blob.
    async fn put(&self, filename: &str, data: Vec<u8>) -> StorageResult<()>;

    /// Read a blob's full content. Fails with `NotFound` when absent.
    async fn get(&self, filename: &str) -> StorageResult<Vec<u8>>;

    /// Delete a blob. Deleting an absent blob is not an error.
    async fn delete(&self, filename: &str) -> StorageResult<()>;

    /// Check whether a blob exists.
    async fn exists(&self, filename: &str) -> StorageResult<bool>;
}
