//! Scoring for generated CEFR exams.

use crate::types::{CefrExamResult, CefrLevel, ExamQuestion};

/// Grade an exam. Answers are matched exactly against each question's
/// correct answer; missing answers count as wrong.
pub fn score_exam(
    level: CefrLevel,
    questions: Vec<ExamQuestion>,
    answers: Vec<Option<String>>,
) -> CefrExamResult {
    let mut user_answers = answers;
    user_answers.resize(questions.len(), None);

    let score = questions
        .iter()
        .zip(&user_answers)
        .filter(|(question, answer)| answer.as_deref() == Some(question.correct_answer.as_str()))
        .count();

    CefrExamResult {
        level,
        score,
        total_questions: questions.len(),
        questions,
        user_answers,
    }
}

impl CefrExamResult {
    /// Wrongly answered questions, with the answer that was given.
    pub fn missed(&self) -> impl Iterator<Item = (&ExamQuestion, Option<&str>)> + '_ {
        self.questions
            .iter()
            .zip(&self.user_answers)
            .filter(|(question, answer)| answer.as_deref() != Some(question.correct_answer.as_str()))
            .map(|(question, answer)| (question, answer.as_deref()))
    }

    pub fn is_perfect(&self) -> bool {
        self.score == self.total_questions
    }

    /// Short line for the history log.
    pub fn summary(&self) -> String {
        format!(
            "CEFR {} exam: {}/{}",
            self.level, self.score, self.total_questions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn question(text: &str, answer: &str) -> ExamQuestion {
        ExamQuestion {
            section: "Đọc hiểu".to_string(),
            question_text: text.to_string(),
            audio_script: None,
            options: vec![answer.to_string(), "other".to_string()],
            correct_answer: answer.to_string(),
            explanation: String::new(),
        }
    }

    #[test]
    fn counts_exact_matches() {
        let result = score_exam(
            CefrLevel::B1,
            vec![question("q1", "went"), question("q2", "has been"), question("q3", "on")],
            vec![
                Some("went".to_string()),
                Some("have been".to_string()),
                Some("on".to_string()),
            ],
        );
        assert_eq!(result.score, 2);
        assert_eq!(result.total_questions, 3);
        assert!(!result.is_perfect());
        assert_eq!(result.summary(), "CEFR B1 exam: 2/3");
    }

    #[test]
    fn missing_answers_are_wrong() {
        let result = score_exam(
            CefrLevel::A2,
            vec![question("q1", "a"), question("q2", "b"), question("q3", "c")],
            vec![Some("a".to_string()), None],
        );
        assert_eq!(result.score, 1);
        assert_eq!(result.user_answers.len(), 3);

        let missed: Vec<(&str, Option<&str>)> = result
            .missed()
            .map(|(q, given)| (q.question_text.as_str(), given))
            .collect();
        assert_eq!(missed, vec![("q2", None), ("q3", None)]);
    }

    #[test]
    fn perfect_exam() {
        let result = score_exam(
            CefrLevel::C1,
            vec![question("q1", "x")],
            vec![Some("x".to_string())],
        );
        assert!(result.is_perfect());
        assert_eq!(result.missed().count(), 0);
    }

    #[test]
    fn empty_exam_is_perfect() {
        let result = score_exam(CefrLevel::A1, vec![], vec![]);
        assert_eq!(result.total_questions, 0);
        assert!(result.is_perfect());
    }
}
