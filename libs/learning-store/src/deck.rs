//! Flashcard deck persisted as a single JSON blob.

use crate::blob::{BlobStore, FLASHCARDS_KEY};
use crate::error::{Result, StoreError};
use chrono::NaiveDate;
use learning_core::{shuffle_due, LearningItem, Rating, ReviewScheduler, VocabularyWord};

/// Outcome of adding a word to the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// Repository for the flashcard deck.
///
/// Cards are keyed by the word's surface form. Every mutation is a
/// load-modify-save of the whole deck; concurrent writers race.
pub struct DeckRepository<S: BlobStore> {
    store: S,
    scheduler: ReviewScheduler,
}

impl<S: BlobStore> DeckRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_scheduler(store, ReviewScheduler::default())
    }

    pub fn with_scheduler(store: S, scheduler: ReviewScheduler) -> Self {
        Self { store, scheduler }
    }

    pub fn scheduler(&self) -> &ReviewScheduler {
        &self.scheduler
    }

    /// All cards in the deck. A deck that was never saved is empty.
    pub fn load(&self) -> Result<Vec<LearningItem>> {
        match self.store.get(FLASHCARDS_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, items: &[LearningItem]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.store.put(FLASHCARDS_KEY, &json)
    }

    /// Look up a card by word.
    pub fn get(&self, word: &str) -> Result<Option<LearningItem>> {
        Ok(self.load()?.into_iter().find(|item| item.key() == word))
    }

    /// Add a word as a new card due today. Adding a word already in the deck
    /// changes nothing.
    pub fn add_word(&self, word: VocabularyWord, today: NaiveDate) -> Result<AddOutcome> {
        let mut items = self.load()?;
        if items.iter().any(|item| item.key() == word.word) {
            tracing::debug!(word = %word.word, "word already in deck");
            return Ok(AddOutcome::AlreadyPresent);
        }

        tracing::info!(word = %word.word, "adding word to deck");
        items.push(self.scheduler.new_item(word, today));
        self.save(&items)?;
        Ok(AddOutcome::Added)
    }

    /// Cards due on `today`, shuffled for a study session.
    pub fn due_items(&self, today: NaiveDate) -> Result<Vec<LearningItem>> {
        let items = self.load()?;
        let due = shuffle_due(&items, today, &mut rand::thread_rng());
        tracing::debug!(due = due.len(), total = items.len(), %today, "selected due cards");
        Ok(due)
    }

    /// Grade a card and persist its new schedule.
    pub fn review(&self, word: &str, rating: Rating, today: NaiveDate) -> Result<LearningItem> {
        let mut items = self.load()?;
        let slot = items
            .iter_mut()
            .find(|item| item.key() == word)
            .ok_or_else(|| StoreError::ItemNotFound(word.to_string()))?;

        let updated = self.scheduler.grade(slot, rating, today)?;
        *slot = updated.clone();
        self.save(&items)?;

        tracing::info!(
            word,
            %rating,
            interval = updated.interval,
            ease_factor = updated.ease_factor,
            review_date = %updated.review_date,
            "reviewed card"
        );
        Ok(updated)
    }

    /// Remove a card. Returns whether it was in the deck.
    pub fn remove_word(&self, word: &str) -> Result<bool> {
        let mut items = self.load()?;
        let before = items.len();
        items.retain(|item| item.key() != word);
        if items.len() == before {
            return Ok(false);
        }

        self.save(&items)?;
        tracing::info!(word, "removed word from deck");
        Ok(true)
    }
}
