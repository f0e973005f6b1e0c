//! Metadata store abstraction.

use async_trait::async_trait;
use filebin_core::FileRecord;
use thiserror::Error;

/// Metadata persistence errors
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The persisted document exists but does not deserialize as a record
    /// array. Surfaces to clients as an internal error.
    #[error("Metadata document corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for metadata operations
pub type MetadataResult<T> = Result<T, MetadataError>;

/// Whole-document persistence for the ordered file-record sequence.
///
/// The document is the single source of truth for which files exist. Callers
/// load it fully, mutate in memory, and write it fully back; there is no
/// incremental update and no cross-request cache.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Read the full record sequence. An absent document reads as empty.
    async fn read_all(&self) -> MetadataResult<Vec<FileRecord>>;

    /// Serialize and overwrite the whole document in one write.
    async fn write_all(&self, records: &[FileRecord]) -> MetadataResult<()>;

    /// Create the document holding an empty sequence if none exists yet.
    /// Idempotent; runs at startup before any request is served.
    async fn init(&self) -> MetadataResult<()>;
}
