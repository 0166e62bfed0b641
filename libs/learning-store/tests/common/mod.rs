//! Shared helpers for store integration tests.

pub mod fixtures;

use std::sync::Arc;

use learning_store::{DeckRepository, HistoryLog, SqliteBlobStore};

/// Deck and history sharing one in-memory SQLite store.
pub struct TestContext {
    pub store: Arc<SqliteBlobStore>,
    pub deck: DeckRepository<Arc<SqliteBlobStore>>,
    pub history: HistoryLog<Arc<SqliteBlobStore>>,
}

impl TestContext {
    pub fn new() -> Self {
        let store = Arc::new(SqliteBlobStore::open_in_memory().expect("open in-memory store"));
        Self {
            deck: DeckRepository::new(Arc::clone(&store)),
            history: HistoryLog::new(Arc::clone(&store)),
            store,
        }
    }
}
