//! Core types for the English-learning application.

use crate::error::CoreError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CEFR proficiency level.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum CefrLevel {
    #[default]
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl CefrLevel {
    /// All levels, easiest first.
    pub const ALL: [CefrLevel; 6] = [
        Self::A1,
        Self::A2,
        Self::B1,
        Self::B2,
        Self::C1,
        Self::C2,
    ];

    /// Get the level name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::C1 => "C1",
            Self::C2 => "C2",
        }
    }
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CefrLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::InvalidLevel(s.to_string()))
    }
}

/// Self-rated recall difficulty for a flashcard review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Hard,
    Good,
    Easy,
}

impl Rating {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hard => "hard",
            Self::Good => "good",
            Self::Easy => "easy",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hard" => Ok(Self::Hard),
            "good" => Ok(Self::Good),
            "easy" => Ok(Self::Easy),
            _ => Err(CoreError::InvalidRating(s.to_string())),
        }
    }
}

/// Vocabulary entry produced by the content provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyWord {
    pub level: CefrLevel,
    /// English surface form; the identity key of a flashcard.
    pub word: String,
    pub ipa: String,
    pub meaning_vi: String,
    /// Part of speech.
    pub pos: String,
    pub example_en: String,
    pub example_vi: String,
}

/// Vocabulary entry under spaced repetition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningItem {
    #[serde(rename = "word")]
    pub content: VocabularyWord,
    #[serde(with = "review_date")]
    pub review_date: NaiveDate,
    pub interval: f64,
    pub ease_factor: f64,
}

impl LearningItem {
    /// Identity key within a deck.
    pub fn key(&self) -> &str {
        &self.content.word
    }
}

/// Review dates are written as `YYYY-MM-DD`. Older decks stored full
/// RFC 3339 timestamps of a local moment; those map to the local calendar date.
mod review_date {
    use chrono::{DateTime, Local, NaiveDate, TimeZone};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    /// Calendar date of `raw` as seen in `tz`.
    pub(super) fn parse_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(raw, FORMAT).ok().or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(tz).date_naive())
        })
    }

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_in(&raw, &Local)
            .ok_or_else(|| de::Error::custom(format!("invalid review date: {raw}")))
    }
}

/// Translation or dictionary lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub source_lang: String,
    pub target_lang: String,
    pub en_translation: String,
    pub ipa: String,
    pub vi_translation: String,
    pub examples: Vec<Example>,
    pub grammar_notes: Vec<String>,
}

/// Bilingual example sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub en: String,
    pub vi: String,
}

/// One turn of a practice conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationLine {
    pub topic: String,
    pub turn: u32,
    pub en: String,
    pub vi: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarError {
    pub error_text: String,
    pub explanation: String,
    pub suggestion: String,
}

/// Grammar check of a single sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarCheckResult {
    pub original_sentence: String,
    pub corrected_sentence: String,
    pub errors: Vec<GrammarError>,
}

/// Multiple-choice exam question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamQuestion {
    pub section: String,
    pub question_text: String,
    /// Script read aloud for listening questions.
    #[serde(default)]
    pub audio_script: Option<String>,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

/// Graded CEFR exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CefrExamResult {
    pub level: CefrLevel,
    pub score: usize,
    pub total_questions: usize,
    pub questions: Vec<ExamQuestion>,
    pub user_answers: Vec<Option<String>>,
}

/// Activity recorded in the history log.
///
/// Logs written by the browser app used the Vietnamese view labels; those
/// are still accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryKind {
    #[serde(alias = "Dịch thuật")]
    Translator,
    #[serde(alias = "Từ điển")]
    Dictionary,
    #[serde(alias = "Hội thoại")]
    Conversations,
    #[serde(alias = "Thi CEFR")]
    CefrExam,
    #[serde(alias = "Luyện Ngữ pháp")]
    GrammarPractice,
}

/// Payload of a history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HistoryContent {
    Translation(TranslationResult),
    Conversation(Vec<ConversationLine>),
    CefrExam(CefrExamResult),
    GrammarCheck(GrammarCheckResult),
}

/// Entry in the activity history log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: HistoryKind,
    pub timestamp: DateTime<Utc>,
    pub summary: String,
    pub content: HistoryContent,
}
