//! Core library for the English-learning application.
//!
//! Provides:
//! - Spaced repetition scheduling for vocabulary flashcards
//! - Similarity scoring for pronunciation practice (Levenshtein distance)
//! - Vocabulary quiz generation and CEFR exam scoring
//! - Shared types (LearningItem, Rating, VocabularyWord, HistoryItem, etc.)

pub mod error;
pub mod exam;
pub mod quiz;
pub mod scheduler;
pub mod similarity;
pub mod types;

pub use error::{CoreError, Result};
pub use exam::score_exam;
pub use quiz::{build_quiz, score_answers, QuizKind, QuizQuestion};
pub use scheduler::{is_due, select_due, shuffle_due, today_local, ReviewScheduler};
pub use similarity::{
    compare_speech, levenshtein_distance, normalize, normalized_similarity, similarity_score,
    SpeechMatch, DEFAULT_PASS_THRESHOLD,
};
pub use types::{
    CefrExamResult, CefrLevel, ConversationLine, Example, ExamQuestion, GrammarCheckResult,
    GrammarError, HistoryContent, HistoryItem, HistoryKind, LearningItem, Rating,
    TranslationResult, VocabularyWord,
};
