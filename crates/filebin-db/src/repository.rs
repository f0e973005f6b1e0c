//! Record-level operations over the metadata document.

use crate::traits::{MetadataResult, MetadataStore};
use filebin_core::FileRecord;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Repository over a [`MetadataStore`], used by the HTTP handlers.
///
/// Every mutation is a read-all, modify-in-memory, write-all sequence.
/// Mutations serialize through a single mutex so a concurrent writer cannot
/// lose another's update or tear the document; reads take no lock and see
/// whatever the last completed write persisted.
#[derive(Clone)]
pub struct FileRepository {
    store: Arc<dyn MetadataStore>,
    write_lock: Arc<Mutex<()>>,
}

impl FileRepository {
    pub fn new(store: Arc<dyn MetadataStore>) -> Self {
        FileRepository {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Create the metadata document if this is the first-ever startup.
    pub async fn init(&self) -> MetadataResult<()> {
        self.store.init().await
    }

    /// All records, insertion order preserved.
    pub async fn list(&self) -> MetadataResult<Vec<FileRecord>> {
        self.store.read_all().await
    }

    /// Look up a record by id.
    pub async fn get(&self, id: &str) -> MetadataResult<Option<FileRecord>> {
        let records = self.store.read_all().await?;
        Ok(records.into_iter().find(|record| record.id == id))
    }

    /// Append a record to the end of the document.
    pub async fn append(&self, record: FileRecord) -> MetadataResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.store.read_all().await?;
        records.push(record);
        self.store.write_all(&records).await
    }

    /// Remove a record by id, returning it, or `None` for an unknown id
    /// (the document is left untouched in that case).
    pub async fn remove(&self, id: &str) -> MetadataResult<Option<FileRecord>> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.store.read_all().await?;
        let Some(position) = records.iter().position(|record| record.id == id) else {
            return Ok(None);
        };

        let removed = records.remove(position);
        self.store.write_all(&records).await?;

        tracing::debug!(id = %removed.id, "File record removed");
        Ok(Some(removed))
    }

    /// Overwrite a record's privacy field and persist, returning the updated
    /// record, or `None` for an unknown id.
    pub async fn set_privacy(&self, id: &str, privacy: &str) -> MetadataResult<Option<FileRecord>> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.store.read_all().await?;
        let Some(record) = records.iter_mut().find(|record| record.id == id) else {
            return Ok(None);
        };

        record.privacy = privacy.to_string();
        let updated = record.clone();
        self.store.write_all(&records).await?;

        tracing::debug!(id = %updated.id, privacy = %updated.privacy, "File record privacy updated");
        Ok(Some(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::JsonDocumentStore;
    use crate::memory::MemoryDocumentStore;
    use tempfile::tempdir;

    fn record(id: &str, name: &str) -> FileRecord {
        FileRecord {
            id: id.to_string(),
            original_name: name.to_string(),
            size: name.len() as u64,
            mimetype: "text/plain".to_string(),
            privacy: "private".to_string(),
        }
    }

    fn memory_repository() -> FileRepository {
        FileRepository::new(Arc::new(MemoryDocumentStore::new()))
    }

    #[tokio::test]
    async fn test_append_and_list_preserve_insertion_order() {
        let repo = memory_repository();

        repo.append(record("one.txt", "one")).await.unwrap();
        repo.append(record("two.txt", "two")).await.unwrap();
        repo.append(record("three.txt", "three")).await.unwrap();

        let ids: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["one.txt", "two.txt", "three.txt"]);
    }

    #[tokio::test]
    async fn test_get_finds_by_id() {
        let repo = memory_repository();
        repo.append(record("one.txt", "one")).await.unwrap();

        assert_eq!(
            repo.get("one.txt").await.unwrap().unwrap().original_name,
            "one"
        );
        assert!(repo.get("unknown").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_returns_record_and_deletes_it() {
        let repo = memory_repository();
        repo.append(record("one.txt", "one")).await.unwrap();
        repo.append(record("two.txt", "two")).await.unwrap();

        let removed = repo.remove("one.txt").await.unwrap().unwrap();
        assert_eq!(removed.id, "one.txt");

        let remaining = repo.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "two.txt");
    }

    #[tokio::test]
    async fn test_remove_unknown_id_is_none_and_leaves_store_unchanged() {
        let repo = memory_repository();
        repo.append(record("one.txt", "one")).await.unwrap();

        assert!(repo.remove("unknown").await.unwrap().is_none());
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_set_privacy_overwrites_and_persists() {
        let repo = memory_repository();
        repo.append(record("one.txt", "one")).await.unwrap();

        let updated = repo.set_privacy("one.txt", "public").await.unwrap().unwrap();
        assert_eq!(updated.privacy, "public");
        assert_eq!(repo.list().await.unwrap()[0].privacy, "public");

        // Any string is accepted, not just a fixed enum.
        let updated = repo
            .set_privacy("one.txt", "unlisted-draft")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.privacy, "unlisted-draft");
    }

    #[tokio::test]
    async fn test_set_privacy_unknown_id_is_none() {
        let repo = memory_repository();
        assert!(repo.set_privacy("unknown", "public").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mutations_persist_through_the_json_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("files.json");

        let repo = FileRepository::new(Arc::new(JsonDocumentStore::new(&path)));
        repo.init().await.unwrap();
        repo.append(record("one.txt", "one")).await.unwrap();
        repo.set_privacy("one.txt", "public").await.unwrap();

        // A fresh repository over the same path sees the persisted state.
        let reopened = FileRepository::new(Arc::new(JsonDocumentStore::new(&path)));
        let records = reopened.list().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].privacy, "public");
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let repo = memory_repository();

        let mut handles = Vec::new();
        for i in 0..10 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.append(record(&format!("{i}.txt"), "x")).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(repo.list().await.unwrap().len(), 10);
    }
}
