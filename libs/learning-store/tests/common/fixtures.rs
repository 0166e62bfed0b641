//! Test fixtures and factory functions for creating test data.
#![allow(dead_code)]

use chrono::NaiveDate;
use learning_core::{CefrLevel, Example, ExamQuestion, TranslationResult, VocabularyWord};

/// Calendar date shorthand.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Vocabulary entry with placeholder fields.
pub fn vocabulary_word(word: &str) -> VocabularyWord {
    VocabularyWord {
        level: CefrLevel::A2,
        word: word.to_string(),
        ipa: format!("/{word}/"),
        meaning_vi: format!("nghĩa của {word}"),
        pos: "noun".to_string(),
        example_en: format!("This is a {word}."),
        example_vi: format!("Đây là một {word}."),
    }
}

pub fn translation(text: &str) -> TranslationResult {
    TranslationResult {
        source_lang: "Vietnamese".to_string(),
        target_lang: "English".to_string(),
        en_translation: text.to_string(),
        ipa: String::new(),
        vi_translation: String::new(),
        examples: vec![Example {
            en: text.to_string(),
            vi: String::new(),
        }],
        grammar_notes: vec![],
    }
}

pub fn exam_question(text: &str, answer: &str) -> ExamQuestion {
    ExamQuestion {
        section: "Nghe hiểu".to_string(),
        question_text: text.to_string(),
        audio_script: Some(format!("Listen: {answer}")),
        options: vec![answer.to_string(), "none of these".to_string()],
        correct_answer: answer.to_string(),
        explanation: String::new(),
    }
}
