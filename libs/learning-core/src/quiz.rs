//! Multiple-choice vocabulary quiz built from a pool of words.

use crate::error::{CoreError, Result};
use crate::types::VocabularyWord;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Smallest pool a quiz can be built from.
pub const MIN_POOL_SIZE: usize = 10;

/// Questions per quiz unless the caller asks otherwise.
pub const DEFAULT_QUESTION_COUNT: usize = 10;

const DISTRACTORS_PER_QUESTION: usize = 3;

/// What the learner is asked to identify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizKind {
    /// Show the English word, pick its Vietnamese meaning.
    Meaning,
    /// Show the Vietnamese meaning, pick the English word.
    Word,
}

impl QuizKind {
    fn field(self, word: &VocabularyWord) -> &str {
        match self {
            Self::Meaning => &word.meaning_vi,
            Self::Word => &word.word,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub word: VocabularyWord,
    pub kind: QuizKind,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl QuizQuestion {
    /// The text shown to the learner.
    pub fn prompt(&self) -> &str {
        match self.kind {
            QuizKind::Meaning => &self.word.word,
            QuizKind::Word => &self.word.meaning_vi,
        }
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }
}

/// Build a quiz of up to `question_count` questions from distinct pool words.
pub fn build_quiz<R: Rng + ?Sized>(
    pool: &[VocabularyWord],
    question_count: usize,
    rng: &mut R,
) -> Result<Vec<QuizQuestion>> {
    if pool.len() < MIN_POOL_SIZE {
        return Err(CoreError::NotEnoughWords {
            needed: MIN_POOL_SIZE,
            available: pool.len(),
        });
    }

    let questions = pool
        .choose_multiple(rng, question_count.min(pool.len()))
        .cloned()
        .collect::<Vec<_>>()
        .into_iter()
        .map(|word| {
            let kind = if rng.gen_bool(0.5) {
                QuizKind::Meaning
            } else {
                QuizKind::Word
            };
            build_question(pool, word, kind, rng)
        })
        .collect();

    Ok(questions)
}

fn build_question<R: Rng + ?Sized>(
    pool: &[VocabularyWord],
    word: VocabularyWord,
    kind: QuizKind,
    rng: &mut R,
) -> QuizQuestion {
    let correct_answer = kind.field(&word).to_string();

    let mut candidates: Vec<&str> = pool
        .iter()
        .map(|w| kind.field(w))
        .filter(|value| *value != correct_answer)
        .collect();
    candidates.sort_unstable();
    candidates.dedup();

    let mut options: Vec<String> = candidates
        .choose_multiple(rng, DISTRACTORS_PER_QUESTION)
        .map(|value| value.to_string())
        .collect();
    options.push(correct_answer.clone());
    options.shuffle(rng);

    QuizQuestion {
        word,
        kind,
        options,
        correct_answer,
    }
}

/// Number of correctly answered questions. Unanswered questions count as wrong.
pub fn score_answers(questions: &[QuizQuestion], answers: &[String]) -> usize {
    questions
        .iter()
        .zip(answers)
        .filter(|(question, answer)| question.is_correct(answer))
        .count()
}
