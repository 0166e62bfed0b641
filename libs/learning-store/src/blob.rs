//! Key/value storage for JSON blobs.

use crate::error::{Result, StoreError};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

/// Key holding the flashcard deck.
pub const FLASHCARDS_KEY: &str = "flashcards";

/// Key holding the activity history log.
pub const HISTORY_KEY: &str = "history";

/// Storage for serialized JSON values keyed by name.
///
/// Writes replace the whole value; there are no transactions across keys.
pub trait BlobStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn put(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// SQLite-backed blob store.
pub struct SqliteBlobStore {
    conn: Mutex<Connection>,
}

impl SqliteBlobStore {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "opened blob store");
        Self::initialize(conn)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        Self::initialize(Connection::open_in_memory()?)
    }

    fn initialize(conn: Connection) -> Result<Self> {
        conn.execute_batch(crate::schema::SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl BlobStore for SqliteBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.lock()?;
        conn.query_row(
            "SELECT value FROM blobs WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(Into::into)
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO blobs (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        tracing::debug!(key, bytes = value.len(), "stored blob");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM blobs WHERE key = ?1", params![key])?;
        tracing::debug!(key, "removed blob");
        Ok(())
    }
}

/// In-memory blob store.
#[derive(Default)]
pub struct MemoryBlobStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(values.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().map_err(|_| StoreError::LockPoisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.lock().map_err(|_| StoreError::LockPoisoned)?;
        values.remove(key);
        Ok(())
    }
}

impl<S: BlobStore + ?Sized> BlobStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        (**self).put(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(store: &dyn BlobStore) {
        assert_eq!(store.get("missing").unwrap(), None);

        store.put("k", "[1,2]").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[1,2]"));

        store.put("k", "[3]").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[3]"));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);

        // removing twice is fine
        store.remove("k").unwrap();
    }

    #[test]
    fn sqlite_store_round_trip() {
        exercise(&SqliteBlobStore::open_in_memory().unwrap());
    }

    #[test]
    fn memory_store_round_trip() {
        exercise(&MemoryBlobStore::new());
    }

    #[test]
    fn keys_are_independent() {
        let store = SqliteBlobStore::open_in_memory().unwrap();
        store.put(FLASHCARDS_KEY, "[]").unwrap();
        store.put(HISTORY_KEY, "[{}]").unwrap();
        store.remove(HISTORY_KEY).unwrap();
        assert_eq!(store.get(FLASHCARDS_KEY).unwrap().as_deref(), Some("[]"));
    }
}
