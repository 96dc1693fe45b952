//! `SQLite` key/value store backed by the `kv_entries` table.

use super::KeyValueStore;
use crate::entities::{KvEntry, kv_entry};
use crate::errors::Result;
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use tracing::{debug, instrument, trace};

/// Key/value store scoped to one namespace of the `kv_entries` table.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db: DatabaseConnection,
    namespace: String,
}

impl SqliteStore {
    /// Wraps an initialized connection; see [`crate::config::database::init_db`].
    #[must_use]
    pub fn new(db: DatabaseConnection, namespace: impl Into<String>) -> Self {
        Self {
            db,
            namespace: namespace.into(),
        }
    }

    /// Namespace every key is stored under
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl KeyValueStore for SqliteStore {
    #[instrument(skip(self), fields(namespace = %self.namespace))]
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entry = KvEntry::find_by_id((self.namespace.clone(), key.to_string()))
            .one(&self.db)
            .await?;
        trace!("Lookup for key '{}' found: {}", key, entry.is_some());
        Ok(entry.map(|e| e.value))
    }

    #[instrument(skip(self, value), fields(namespace = %self.namespace, len = value.len()))]
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = chrono::Utc::now().naive_utc();
        let existing = KvEntry::find_by_id((self.namespace.clone(), key.to_string()))
            .one(&self.db)
            .await?;

        let entry = kv_entry::ActiveModel {
            namespace: Set(self.namespace.clone()),
            key: Set(key.to_string()),
            value: Set(value.to_string()),
            updated_at: Set(now),
        };

        if existing.is_some() {
            KvEntry::update(entry).exec(&self.db).await?;
        } else {
            KvEntry::insert(entry).exec(&self.db).await?;
        }
        debug!("Stored {} bytes under '{}'", value.len(), key);
        Ok(())
    }
}
