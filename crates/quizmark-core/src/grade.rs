//! Grading: compare a response set against an answer key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{AnswerKey, Letter, ResponseSet};

/// One incorrectly answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub question: u32,
    pub submitted: Letter,
    pub correct: Letter,
}

/// Summary of a grading run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeReport {
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Size of the answer key, not of the response set.
    pub total_questions: usize,
    pub correct_answers: usize,
    /// Wrong answers, in the order the responses were first given.
    pub mismatches: Vec<Mismatch>,
    /// `correct / total * 100`, not rounded. 0.0 for an empty key.
    pub score_percentage: f64,
}

/// Grade `responses` against `key`.
///
/// Responses for question numbers absent from the key are ignored, never
/// counted as correct or incorrect. An empty key grades to zero total and a
/// 0.0 percentage rather than dividing by zero.
pub fn grade(key: &AnswerKey, responses: &ResponseSet) -> GradeReport {
    let total_questions = key.len();
    let mut correct_answers = 0;
    let mut mismatches = Vec::new();

    for (question, submitted) in responses.iter() {
        let Some(correct) = key.get(question) else {
            continue;
        };
        if submitted == correct {
            correct_answers += 1;
        } else {
            mismatches.push(Mismatch {
                question,
                submitted,
                correct,
            });
        }
    }

    let score_percentage = if total_questions == 0 {
        0.0
    } else {
        correct_answers as f64 / total_questions as f64 * 100.0
    };

    GradeReport {
        created_at: Utc::now(),
        total_questions,
        correct_answers,
        mismatches,
        score_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> AnswerKey {
        [(1, Letter::A), (2, Letter::B), (3, Letter::C)]
            .into_iter()
            .collect()
    }

    #[test]
    fn perfect_round_trip() {
        let key = key();
        let responses: ResponseSet = key.iter().collect();

        let report = grade(&key, &responses);
        assert_eq!(report.total_questions, 3);
        assert_eq!(report.correct_answers, 3);
        assert!(report.mismatches.is_empty());
        assert_eq!(report.score_percentage, 100.0);
    }

    #[test]
    fn empty_responses() {
        let report = grade(&key(), &ResponseSet::new());
        assert_eq!(report.correct_answers, 0);
        assert!(report.mismatches.is_empty());
        assert_eq!(report.score_percentage, 0.0);
    }

    #[test]
    fn unknown_question_ignored() {
        let responses: ResponseSet = [(1, Letter::A), (2, Letter::C), (4, Letter::D)]
            .into_iter()
            .collect();

        let report = grade(&key(), &responses);
        assert_eq!(report.total_questions, 3);
        assert_eq!(report.correct_answers, 1);
        assert_eq!(
            report.mismatches,
            vec![Mismatch {
                question: 2,
                submitted: Letter::C,
                correct: Letter::B,
            }]
        );
        assert!((report.score_percentage - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_key_grades_to_zero() {
        let responses: ResponseSet = [(1, Letter::A)].into_iter().collect();
        let report = grade(&AnswerKey::default(), &responses);
        assert_eq!(report.total_questions, 0);
        assert_eq!(report.correct_answers, 0);
        assert_eq!(report.score_percentage, 0.0);
    }

    #[test]
    fn lowercase_submission_matches() {
        let key: AnswerKey = [(1, Letter::B)].into_iter().collect();
        let mut responses = ResponseSet::new();
        responses.record(1, "b".parse().unwrap());

        let report = grade(&key, &responses);
        assert_eq!(report.correct_answers, 1);
    }

    #[test]
    fn mismatch_order_follows_response_order() {
        let responses: ResponseSet = [(3, Letter::A), (1, Letter::B), (2, Letter::C)]
            .into_iter()
            .collect();

        let report = grade(&key(), &responses);
        let order: Vec<u32> = report.mismatches.iter().map(|m| m.question).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn report_serializes_to_json() {
        let report = grade(&key(), &key().iter().collect());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"score_percentage\":100.0"));
    }
}
