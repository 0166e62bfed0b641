//! Local persistence for the English-learning application.
//!
//! Everything is stored as JSON blobs under a handful of keys, in SQLite or
//! in memory. On top of that sit the flashcard deck and the history log.

pub mod blob;
pub mod config;
pub mod deck;
pub mod error;
pub mod history;
pub mod schema;

pub use blob::{BlobStore, MemoryBlobStore, SqliteBlobStore, FLASHCARDS_KEY, HISTORY_KEY};
pub use config::StoreConfig;
pub use deck::{AddOutcome, DeckRepository};
pub use error::{Result, StoreError};
pub use history::{HistoryLog, DEFAULT_HISTORY_LIMIT};
