//! Capped activity history log.

use crate::blob::{BlobStore, HISTORY_KEY};
use crate::error::Result;
use chrono::Utc;
use learning_core::{HistoryContent, HistoryItem, HistoryKind};
use uuid::Uuid;

/// Entries kept unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// History of translations, lookups, conversations, exams and grammar checks,
/// newest first.
pub struct HistoryLog<S: BlobStore> {
    store: S,
    limit: usize,
}

impl<S: BlobStore> HistoryLog<S> {
    pub fn new(store: S) -> Self {
        Self::with_limit(store, DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(store: S, limit: usize) -> Self {
        Self { store, limit }
    }

    /// All entries, newest first. An unreadable log is treated as empty.
    pub fn list(&self) -> Result<Vec<HistoryItem>> {
        let Some(json) = self.store.get(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&json) {
            Ok(items) => Ok(items),
            Err(err) => {
                tracing::warn!(error = %err, "history log is unreadable, starting fresh");
                Ok(Vec::new())
            }
        }
    }

    /// Record an activity at the front of the log, dropping the oldest
    /// entries past the limit.
    pub fn add(
        &self,
        kind: HistoryKind,
        summary: impl Into<String>,
        content: HistoryContent,
    ) -> Result<HistoryItem> {
        let item = HistoryItem {
            id: Uuid::new_v4().to_string(),
            kind,
            timestamp: Utc::now(),
            summary: summary.into(),
            content,
        };

        let mut items = self.list()?;
        items.insert(0, item.clone());
        items.truncate(self.limit);

        self.store.put(HISTORY_KEY, &serde_json::to_string(&items)?)?;
        tracing::info!(id = %item.id, ?kind, entries = items.len(), "recorded history entry");
        Ok(item)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(HISTORY_KEY)?;
        tracing::info!("cleared history");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::MemoryBlobStore;
    use learning_core::{ConversationLine, GrammarCheckResult};

    fn grammar(sentence: &str) -> HistoryContent {
        HistoryContent::GrammarCheck(GrammarCheckResult {
            original_sentence: sentence.to_string(),
            corrected_sentence: sentence.to_string(),
            errors: vec![],
        })
    }

    #[test]
    fn newest_entry_comes_first() {
        let log = HistoryLog::new(MemoryBlobStore::new());
        log.add(HistoryKind::GrammarPractice, "first", grammar("One.")).unwrap();
        let second = log
            .add(
                HistoryKind::Conversations,
                "second",
                HistoryContent::Conversation(vec![ConversationLine {
                    topic: "Shopping".to_string(),
                    turn: 1,
                    en: "How much is it?".to_string(),
                    vi: "Cái này bao nhiêu?".to_string(),
                }]),
            )
            .unwrap();

        let items = log.list().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], second);
        assert_eq!(items[1].summary, "first");
    }

    #[test]
    fn log_is_capped() {
        let log = HistoryLog::with_limit(MemoryBlobStore::new(), 3);
        for i in 0..5 {
            log.add(HistoryKind::GrammarPractice, format!("entry {i}"), grammar("x"))
                .unwrap();
        }

        let summaries: Vec<String> = log.list().unwrap().into_iter().map(|i| i.summary).collect();
        assert_eq!(summaries, vec!["entry 4", "entry 3", "entry 2"]);
    }

    #[test]
    fn ids_are_unique() {
        let log = HistoryLog::new(MemoryBlobStore::new());
        let a = log.add(HistoryKind::GrammarPractice, "a", grammar("a")).unwrap();
        let b = log.add(HistoryKind::GrammarPractice, "b", grammar("b")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn clear_empties_log() {
        let log = HistoryLog::new(MemoryBlobStore::new());
        log.add(HistoryKind::GrammarPractice, "a", grammar("a")).unwrap();
        log.clear().unwrap();
        assert!(log.list().unwrap().is_empty());
    }

    #[test]
    fn unreadable_log_starts_fresh() {
        let store = MemoryBlobStore::new();
        store.put(HISTORY_KEY, "{broken").unwrap();
        let log = HistoryLog::new(store);
        assert!(log.list().unwrap().is_empty());

        log.add(HistoryKind::GrammarPractice, "a", grammar("a")).unwrap();
        assert_eq!(log.list().unwrap().len(), 1);
    }
}
