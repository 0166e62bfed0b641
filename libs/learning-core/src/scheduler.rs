//! Spaced repetition scheduling for vocabulary flashcards.
//!
//! A simplified SM-2 variant with three ratings:
//! - Hard resets the card to tomorrow and lowers its ease
//! - Good grows the interval by the ease factor
//! - Easy grows it by the ease factor plus a bonus, and raises the ease
//!
//! Everything here works at day granularity. Callers pass "today" in
//! explicitly so scheduling stays a pure function of its arguments.

use crate::error::{CoreError, Result};
use crate::types::{LearningItem, Rating, VocabularyWord};
use chrono::{Days, Local, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

/// Slack for ease factors that drifted a hair under the floor through float arithmetic.
const EASE_TOLERANCE: f64 = 1e-9;

/// Review scheduler with configurable parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewScheduler {
    pub initial_interval: f64,
    pub initial_ease: f64,
    pub minimum_ease: f64,
    /// Upper bound for the ease factor. `None` leaves it unbounded.
    pub maximum_ease: Option<f64>,
    pub hard_interval: f64,
    pub hard_penalty: f64,
    pub easy_bonus: f64,
    pub easy_ease_step: f64,
}

impl Default for ReviewScheduler {
    fn default() -> Self {
        Self {
            initial_interval: 1.0,
            initial_ease: 2.5,
            minimum_ease: 1.3,
            maximum_ease: None,
            hard_interval: 1.0,
            hard_penalty: 0.2,
            easy_bonus: 1.3,
            easy_ease_step: 0.15,
        }
    }
}

impl ReviewScheduler {
    /// Fresh card for a vocabulary entry, due on the day it is added.
    pub fn new_item(&self, content: VocabularyWord, today: NaiveDate) -> LearningItem {
        LearningItem {
            content,
            review_date: today,
            interval: self.initial_interval,
            ease_factor: self.initial_ease,
        }
    }

    /// Compute the next review state after the user rates a card.
    ///
    /// The returned item keeps the unrounded interval; only the review date
    /// is rounded to whole days, and it is always at least one day after `today`.
    pub fn grade(&self, item: &LearningItem, rating: Rating, today: NaiveDate) -> Result<LearningItem> {
        self.validate(item)?;

        let (interval, ease_factor) = match rating {
            Rating::Hard => (
                self.hard_interval,
                (item.ease_factor - self.hard_penalty).max(self.minimum_ease),
            ),
            Rating::Good => (item.interval * item.ease_factor, item.ease_factor),
            Rating::Easy => (
                item.interval * item.ease_factor * self.easy_bonus,
                self.cap_ease(item.ease_factor + self.easy_ease_step),
            ),
        };

        let days = interval.round().max(1.0) as u64;
        let review_date = today
            .checked_add_days(Days::new(days))
            .ok_or_else(|| CoreError::InvalidItem {
                word: item.key().to_string(),
                reason: format!("interval of {interval} days overflows the calendar"),
            })?;

        Ok(LearningItem {
            content: item.content.clone(),
            review_date,
            interval,
            ease_factor,
        })
    }

    fn cap_ease(&self, ease: f64) -> f64 {
        match self.maximum_ease {
            Some(max) => ease.min(max),
            None => ease,
        }
    }

    fn validate(&self, item: &LearningItem) -> Result<()> {
        let reason = if !item.interval.is_finite() || item.interval <= 0.0 {
            format!("interval must be a positive number of days, got {}", item.interval)
        } else if !item.ease_factor.is_finite()
            || item.ease_factor + EASE_TOLERANCE < self.minimum_ease
        {
            format!(
                "ease factor {} is below the minimum of {}",
                item.ease_factor, self.minimum_ease
            )
        } else {
            return Ok(());
        };

        Err(CoreError::InvalidItem {
            word: item.key().to_string(),
            reason,
        })
    }
}

/// Whether a card is due on `reference_date`.
pub fn is_due(item: &LearningItem, reference_date: NaiveDate) -> bool {
    item.review_date <= reference_date
}

/// Cards due on `reference_date`. The order of the result is unspecified.
pub fn select_due(items: &[LearningItem], reference_date: NaiveDate) -> Vec<&LearningItem> {
    items
        .iter()
        .filter(|item| is_due(item, reference_date))
        .collect()
}

/// Due cards in a random order, for presenting a study session.
pub fn shuffle_due<R: Rng + ?Sized>(
    items: &[LearningItem],
    reference_date: NaiveDate,
    rng: &mut R,
) -> Vec<LearningItem> {
    let mut due: Vec<LearningItem> = select_due(items, reference_date)
        .into_iter()
        .cloned()
        .collect();
    due.shuffle(rng);
    due
}

/// Today's date in the local time zone.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}
