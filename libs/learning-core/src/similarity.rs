//! Similarity scoring for pronunciation and speaking practice.
//!
//! A spoken attempt is transcribed elsewhere; here the transcript is compared
//! with the reference text using Levenshtein distance.

use serde::{Deserialize, Serialize};

/// Score at or above which a speaking attempt counts as a pass.
pub const DEFAULT_PASS_THRESHOLD: u8 = 70;

/// Result of comparing a transcript to the text the learner was asked to say.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechMatch {
    /// Closeness between 0 and 100.
    pub score: u8,
    /// Whether the score reached the pass threshold.
    pub passed: bool,
    /// Normalized reference text (for display).
    pub reference_normalized: String,
    /// Normalized transcript (for display).
    pub observed_normalized: String,
}

/// Compare a transcript to its reference text.
pub fn compare_speech(reference: &str, observed: &str, pass_threshold: u8) -> SpeechMatch {
    let reference_normalized = normalize(reference);
    let observed_normalized = normalize(observed);
    let score = score_normalized(&reference_normalized, &observed_normalized);

    SpeechMatch {
        score,
        passed: score >= pass_threshold,
        reference_normalized,
        observed_normalized,
    }
}

/// Lower-case the text and drop everything except ASCII letters, digits and whitespace.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect()
}

/// Closeness of two texts as an integer percentage.
///
/// Both sides are normalized first, so the score is symmetric. Two texts that
/// are empty after normalization score 100.
pub fn similarity_score(reference: &str, observed: &str) -> u8 {
    score_normalized(&normalize(reference), &normalize(observed))
}

fn score_normalized(a: &str, b: &str) -> u8 {
    (ratio(a, b) * 100.0).round() as u8
}

/// Share of the longer text left unchanged by the edit distance.
fn ratio(a: &str, b: &str) -> f64 {
    let longer_len = a.chars().count().max(b.chars().count());
    if longer_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    (longer_len - distance) as f64 / longer_len as f64
}

/// Calculate Levenshtein distance between two strings.
///
/// Keeps a single row sized to the shorter string.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let (longer, shorter) = if a_chars.len() >= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };

    if shorter.is_empty() {
        return longer.len();
    }

    let mut row: Vec<usize> = (0..=shorter.len()).collect();

    for (i, &lc) in longer.iter().enumerate() {
        // row[j] still holds the previous row; `diagonal` is prev[j - 1].
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, &sc) in shorter.iter().enumerate() {
            let cost = usize::from(lc != sc);
            let above = row[j + 1];
            row[j + 1] = (above + 1) // deletion
                .min(row[j] + 1) // insertion
                .min(diagonal + cost); // substitution
            diagonal = above;
        }
    }

    row[shorter.len()]
}

/// Similarity from 0.0 to 1.0 after normalizing both sides.
///
/// Unrounded form of [`similarity_score`].
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    ratio(&normalize(a), &normalize(b))
}
