//! Persistence-backed store for filter shortcuts.

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::record::Record;
use crate::shortcut::model::Shortcut;
use crate::storage::Storage;

const COLLECTION_KEY: &str = "shortcuts";

/// Store for filter shortcuts, persisted as a single JSON collection.
#[derive(Debug, Clone)]
pub struct ShortcutStore {
    storage: Storage,
}

impl ShortcutStore {
    /// Creates a store over `storage`.
    #[must_use]
    pub const fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Returns every shortcut, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or a stored payload cannot be
    /// parsed.
    pub async fn list(&self) -> Result<Vec<Shortcut>> {
        match self.storage.get(COLLECTION_KEY).await? {
            Some(value) => Ok(serde_json::from_str(&value)?),
            None => Ok(Vec::new()),
        }
    }

    /// Appends `shortcut` to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateShortcut`] if a shortcut with the same
    /// title already exists, or an error if storage fails.
    pub async fn add(&self, shortcut: Shortcut) -> Result<Shortcut> {
        let mut shortcuts = self.list().await?;
        if shortcuts.iter().any(|existing| existing.title == shortcut.title) {
            return Err(Error::DuplicateShortcut(shortcut.title));
        }

        shortcuts.push(shortcut.clone());
        self.save(&shortcuts).await?;
        Ok(shortcut)
    }

    /// Removes the shortcut titled `title`.
    ///
    /// Returns whether a shortcut was removed; nothing is written when the
    /// title is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or a stored payload cannot be
    /// parsed.
    pub async fn remove(&self, title: &str) -> Result<bool> {
        let mut shortcuts = self.list().await?;
        let before = shortcuts.len();

        shortcuts.retain(|shortcut| shortcut.title != title);
        if shortcuts.len() == before {
            return Ok(false);
        }

        self.save(&shortcuts).await?;
        Ok(true)
    }

    /// Removes the whole collection.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    pub async fn clear(&self) -> Result<()> {
        self.storage.remove(COLLECTION_KEY).await?;
        Ok(())
    }

    /// Returns every shortcut paired with how many of `records` it matches
    /// at instant `now`.
    ///
    /// Counts are recomputed on demand through the filter engine; nothing
    /// derived is persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or a stored payload cannot be
    /// parsed.
    pub async fn with_counts(
        &self,
        records: &[Record],
        now: DateTime<Utc>,
    ) -> Result<Vec<(Shortcut, usize)>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .map(|shortcut| {
                let filter = shortcut.filters.to_filter();
                let count = records
                    .iter()
                    .filter(|record| filter.matches(record, now))
                    .count();
                (shortcut, count)
            })
            .collect())
    }

    async fn save(&self, shortcuts: &[Shortcut]) -> Result<()> {
        let value = serde_json::to_string(shortcuts)?;
        self.storage.put(COLLECTION_KEY, &value).await
    }
}
