//! Persistence-backed store for triage records.

use chrono::Utc;
use tracing::debug;

use crate::error::Result;
use crate::record::model::{NewRecord, Priority, Record, RecordPatch};
use crate::record::seed::{SEED_COUNT, synthetic_records};
use crate::storage::Storage;

const COLLECTION_KEY: &str = "records";

/// Store for triage records, persisted as a single JSON collection.
///
/// Every operation reads the full collection, mutates it in memory and
/// writes it back. Concurrent writers follow last-write-wins.
#[derive(Debug, Clone)]
pub struct RecordStore {
    storage: Storage,
    seed_on_empty: bool,
}

impl RecordStore {
    /// Creates a store that seeds synthetic records on first use.
    #[must_use]
    pub const fn new(storage: Storage) -> Self {
        Self {
            storage,
            seed_on_empty: true,
        }
    }

    /// Creates a store that starts empty instead of seeding.
    #[must_use]
    pub const fn without_seed(storage: Storage) -> Self {
        Self {
            storage,
            seed_on_empty: false,
        }
    }

    /// Returns every record, newest first.
    ///
    /// When the collection is absent and seeding is enabled, generates and
    /// persists a synthetic collection before returning it.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or a stored payload cannot be
    /// parsed.
    pub async fn list(&self) -> Result<Vec<Record>> {
        match self.storage.get(COLLECTION_KEY).await? {
            Some(value) => Ok(serde_json::from_str(&value)?),
            None if self.seed_on_empty => {
                let records = synthetic_records(SEED_COUNT);
                debug!("Seeded {} synthetic records", records.len());
                self.save(&records).await?;
                Ok(records)
            }
            None => Ok(Vec::new()),
        }
    }

    /// Returns the record with `id`, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or a stored payload cannot be
    /// parsed.
    pub async fn get(&self, id: &str) -> Result<Option<Record>> {
        Ok(self.list().await?.into_iter().find(|record| record.id == id))
    }

    /// Creates a record from `new_record` and prepends it to the collection.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or a stored payload cannot be
    /// parsed.
    pub async fn create(&self, new_record: NewRecord) -> Result<Record> {
        let mut records = self.list().await?;
        let id = next_id(&records);
        let record = new_record.into_record(id, Utc::now());

        records.insert(0, record.clone());
        self.save(&records).await?;
        Ok(record)
    }

    /// Applies `patch` to the record with `id`.
    ///
    /// Returns the updated record, or `None` if no record has that id.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or a stored payload cannot be
    /// parsed.
    pub async fn update(&self, id: &str, patch: RecordPatch) -> Result<Option<Record>> {
        self.mutate(id, |record| {
            record.apply_patch(patch);
            Ok(())
        })
        .await
    }

    /// Deletes the record with `id`.
    ///
    /// Returns whether a record was removed; nothing is written when the id
    /// is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or a stored payload cannot be
    /// parsed.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let mut records = self.list().await?;
        let before = records.len();

        records.retain(|record| record.id != id);
        if records.len() == before {
            return Ok(false);
        }

        self.save(&records).await?;
        Ok(true)
    }

    /// Removes the whole collection.
    ///
    /// A seeding store regenerates synthetic records on the next `list`.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    pub async fn clear(&self) -> Result<()> {
        self.storage.remove(COLLECTION_KEY).await?;
        Ok(())
    }

    /// Replaces the collection with freshly generated synthetic records.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    pub async fn reseed(&self) -> Result<Vec<Record>> {
        let records = synthetic_records(SEED_COUNT);
        self.save(&records).await?;
        Ok(records)
    }

    /// Replaces the collection with `records` as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    pub async fn replace_all(&self, records: &[Record]) -> Result<()> {
        self.save(records).await
    }

    /// Classifies the record with `id` under `category` at `priority`.
    ///
    /// Returns the updated record, or `None` if no record has that id.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is not pending, or if storage fails.
    pub async fn classify(
        &self,
        id: &str,
        category: &str,
        priority: Priority,
    ) -> Result<Option<Record>> {
        self.mutate(id, |record| record.classify(category, priority))
            .await
    }

    /// Archives the record with `id`.
    ///
    /// Returns the updated record, or `None` if no record has that id.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is already archived, or if storage
    /// fails.
    pub async fn archive(&self, id: &str) -> Result<Option<Record>> {
        self.mutate(id, Record::archive).await
    }

    /// Reopens the record with `id` for triage.
    ///
    /// Returns the updated record, or `None` if no record has that id.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is still pending, or if storage fails.
    pub async fn reclassify(&self, id: &str) -> Result<Option<Record>> {
        self.mutate(id, Record::reclassify).await
    }

    async fn mutate<F>(&self, id: &str, op: F) -> Result<Option<Record>>
    where
        F: FnOnce(&mut Record) -> Result<()>,
    {
        let mut records = self.list().await?;
        let Some(record) = records.iter_mut().find(|record| record.id == id) else {
            return Ok(None);
        };

        op(record)?;
        let updated = record.clone();
        self.save(&records).await?;
        Ok(Some(updated))
    }

    async fn save(&self, records: &[Record]) -> Result<()> {
        let value = serde_json::to_string(records)?;
        self.storage.put(COLLECTION_KEY, &value).await
    }
}

fn next_id(records: &[Record]) -> String {
    let base = format!("email-{}", Utc::now().timestamp_millis());
    if records.iter().all(|record| record.id != base) {
        return base;
    }

    let mut suffix = 1;
    loop {
        let candidate = format!("{base}-{suffix}");
        if records.iter().all(|record| record.id != candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::record::model::{Region, Status};

    async fn seeded_store() -> RecordStore {
        RecordStore::new(Storage::in_memory().await.unwrap())
    }

    async fn empty_store() -> RecordStore {
        RecordStore::without_seed(Storage::in_memory().await.unwrap())
    }

    #[tokio::test]
    async fn test_list_seeds_once() {
        let store = seeded_store().await;

        let first = store.list().await.unwrap();
        let second = store.list().await.unwrap();

        assert_eq!(first.len(), SEED_COUNT);
        let first_ids: Vec<_> = first.iter().map(|r| r.id.clone()).collect();
        let second_ids: Vec<_> = second.iter().map(|r| r.id.clone()).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[tokio::test]
    async fn test_list_without_seed_is_empty() {
        let store = empty_store().await;

        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_prepends() {
        let store = empty_store().await;

        let created = store
            .create(
                NewRecord::new("Novo", "a@b.com", "corpo", Region::Bahia)
                    .with_city("Salvador")
                    .with_recipient("voce@empresa.com"),
            )
            .await
            .unwrap();

        let records = store.list().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], created);
        assert_eq!(created.region, Some(Region::Bahia));
        assert_eq!(created.status, Status::Pending);
        assert!(created.id.starts_with("email-"));
    }

    #[tokio::test]
    async fn test_create_on_seeding_store_keeps_seed() {
        let store = seeded_store().await;

        let created = store
            .create(NewRecord::new("Novo", "a@b.com", "corpo", Region::Ceara))
            .await
            .unwrap();

        let records = store.list().await.unwrap();
        assert_eq!(records.len(), SEED_COUNT + 1);
        assert_eq!(records[0].id, created.id);
    }

    #[tokio::test]
    async fn test_update_merges_patch() {
        let store = empty_store().await;
        let created = store
            .create(NewRecord::new("Antes", "a@b.com", "corpo", Region::Parana))
            .await
            .unwrap();

        let updated = store
            .update(
                &created.id,
                RecordPatch {
                    subject: Some("Depois".to_string()),
                    ..RecordPatch::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.subject, "Depois");
        assert_eq!(updated.sender, "a@b.com");
        assert_eq!(store.get(&created.id).await.unwrap().unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let store = empty_store().await;

        let result = store.update("email-none", RecordPatch::default()).await;

        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let store = empty_store().await;
        let created = store
            .create(NewRecord::new("A", "a@b.com", "c", Region::Goias))
            .await
            .unwrap();

        assert!(store.delete(&created.id).await.unwrap());
        assert!(!store.delete(&created.id).await.unwrap());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get() {
        let store = empty_store().await;
        let created = store
            .create(NewRecord::new("A", "a@b.com", "c", Region::Amapa))
            .await
            .unwrap();

        assert_eq!(store.get(&created.id).await.unwrap(), Some(created));
        assert_eq!(store.get("email-none").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear_then_reseed_on_list() {
        let store = seeded_store().await;
        store.list().await.unwrap();

        store.clear().await.unwrap();

        assert_eq!(store.list().await.unwrap().len(), SEED_COUNT);
    }

    #[tokio::test]
    async fn test_clear_without_seed_stays_empty() {
        let store = empty_store().await;
        store
            .create(NewRecord::new("A", "a@b.com", "c", Region::Piaui))
            .await
            .unwrap();

        store.clear().await.unwrap();

        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reseed_replaces_collection() {
        let store = empty_store().await;
        store
            .create(NewRecord::new("A", "a@b.com", "c", Region::Sergipe))
            .await
            .unwrap();

        let records = store.reseed().await.unwrap();

        assert_eq!(records.len(), SEED_COUNT);
        assert_eq!(store.list().await.unwrap().len(), SEED_COUNT);
    }

    #[tokio::test]
    async fn test_replace_all() {
        let store = seeded_store().await;
        store.list().await.unwrap();

        store.replace_all(&[]).await.unwrap();

        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_classify_flow() {
        let store = empty_store().await;
        let created = store
            .create(NewRecord::new("A", "a@b.com", "c", Region::Tocantins))
            .await
            .unwrap();

        let classified = store
            .classify(&created.id, "Trabalho", Priority::High)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(classified.status, Status::Classified);
        assert_eq!(classified.category.as_deref(), Some("Trabalho"));

        // A second classify hits the transition guard and nothing is saved.
        let err = store
            .classify(&created.id, "Pessoal", Priority::Low)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("classify"));
        assert_eq!(
            store.get(&created.id).await.unwrap().unwrap().category.as_deref(),
            Some("Trabalho")
        );
    }

    #[tokio::test]
    async fn test_classify_unknown_id() {
        let store = empty_store().await;

        let result = store.classify("email-none", "Trabalho", Priority::Low).await;

        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_archive_and_reclassify() {
        let store = empty_store().await;
        let created = store
            .create(NewRecord::new("A", "a@b.com", "c", Region::Roraima))
            .await
            .unwrap();

        let archived = store.archive(&created.id).await.unwrap().unwrap();
        assert_eq!(archived.status, Status::Archived);

        let reopened = store.reclassify(&created.id).await.unwrap().unwrap();
        assert_eq!(reopened.status, Status::Pending);
        assert_eq!(reopened.priority, Priority::Medium);
    }

    #[test]
    fn test_next_id_collision_suffix() {
        let mut records = synthetic_records(1);
        records[0].id = format!("email-{}", Utc::now().timestamp_millis());

        let id = next_id(&records);

        assert_ne!(id, records[0].id);
        assert!(id.starts_with("email-"));
    }
}
