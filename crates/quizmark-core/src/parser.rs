//! Answer-key and question-bank text extraction.
//!
//! Both input formats are human-authored and noisy, so both parsers are
//! deliberately lenient: a block or segment that does not match the
//! expected shape is skipped and logged, never fatal. Only a missing file
//! or a pattern-compilation failure aborts a parse call.

use std::path::Path;

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::error::ParseError;
use crate::model::{AnswerKey, Letter, Question, QuestionBank};

/// Read and parse a solutions file into an `AnswerKey`.
pub fn load_answer_key(path: &Path) -> Result<AnswerKey, ParseError> {
    let content = read(path)?;
    parse_answer_key(&content)
}

/// Read and parse a questions file into a `QuestionBank`.
pub fn load_question_bank(path: &Path) -> Result<QuestionBank, ParseError> {
    let content = read(path)?;
    parse_question_bank(&content)
}

fn read(path: &Path) -> Result<String, ParseError> {
    std::fs::read_to_string(path).map_err(|source| ParseError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse solutions text into an `AnswerKey` (useful for testing).
///
/// Blocks are separated by blank lines. A block contributes an entry iff it
/// begins with `<number>]` and contains, case-insensitively, `ans` plus an
/// optional hyphen/whitespace run plus a letter A-E.
pub fn parse_answer_key(content: &str) -> Result<AnswerKey, ParseError> {
    let block_number = Regex::new(r"^(\d+)\]")?;
    let answer = RegexBuilder::new(r"ans[-\s]*([A-E])")
        .case_insensitive(true)
        .build()?;

    let mut entries = Vec::new();
    for block in content.split("\n\n") {
        let Some(cap) = block_number.captures(block) else {
            if !block.trim().is_empty() {
                debug!("solutions block without a leading number marker, skipped");
            }
            continue;
        };
        let Ok(number) = cap[1].parse::<u32>() else {
            debug!("solutions block number out of range, skipped");
            continue;
        };
        let letter = answer
            .captures(block)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().chars().next())
            .and_then(Letter::from_char);
        match letter {
            Some(letter) => entries.push((number, letter)),
            None => debug!(number, "solutions block without an answer, skipped"),
        }
    }

    Ok(entries.into_iter().collect())
}

/// Parse questions text into a `QuestionBank` (useful for testing).
///
/// A question segment starts at a `<number>.` or `<number>)` marker followed
/// by whitespace, at the start of the content or right after a line break,
/// and runs to the next such marker or end of input. Within a segment the
/// four option boundaries A-D must appear in order, each introduced by the
/// letter plus `.`/`)` or the letter plus whitespace, case-insensitively,
/// spanning lines. Segments missing any boundary yield no entry.
pub fn parse_question_bank(content: &str) -> Result<QuestionBank, ParseError> {
    let boundary = Regex::new(r"\n\d+[.)]\s")?;
    let segment = RegexBuilder::new(
        r"(\d+)[.)]\s+(.*?)\s+(?:A[.)]|A\s+)(.*?)\s+(?:B[.)]|B\s+)(.*?)\s+(?:C[.)]|C\s+)(.*?)\s+(?:D[.)]|D\s+)(.*)",
    )
    .case_insensitive(true)
    .dot_matches_new_line(true)
    .build()?;

    // Segment starts: the beginning of the content plus the position right
    // after each line break that introduces a new question marker.
    let mut starts = vec![0usize];
    starts.extend(boundary.find_iter(content).map(|m| m.start() + 1));
    starts.push(content.len());

    let mut questions = Vec::new();
    for pair in starts.windows(2) {
        let text = &content[pair[0]..pair[1]];
        let Some(cap) = segment.captures(text) else {
            if !text.trim().is_empty() {
                debug!("question segment missing option markers, skipped");
            }
            continue;
        };
        let Ok(number) = cap[1].parse::<u32>() else {
            debug!("question number out of range, skipped");
            continue;
        };

        let options = [
            (Letter::A, cap[3].trim()),
            (Letter::B, cap[4].trim()),
            (Letter::C, cap[5].trim()),
            (Letter::D, cap[6].trim()),
        ]
        .into_iter()
        .map(|(letter, text)| (letter, text.to_string()))
        .collect();

        questions.push(Question {
            number,
            prompt: cap[2].trim().to_string(),
            options,
        });
    }

    Ok(questions.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_solutions() {
        let key = parse_answer_key("1] Some text\nans - B\n\n2] Other\nans C").unwrap();
        assert_eq!(key.len(), 2);
        assert_eq!(key.get(1), Some(Letter::B));
        assert_eq!(key.get(2), Some(Letter::C));
    }

    #[test]
    fn solutions_letter_normalized_to_uppercase() {
        let key = parse_answer_key("1] q\nANS-b").unwrap();
        assert_eq!(key.get(1), Some(Letter::B));
    }

    #[test]
    fn block_without_answer_skipped() {
        let key = parse_answer_key("1] nothing here\n\n2] ok\nans - D").unwrap();
        assert_eq!(key.len(), 1);
        assert_eq!(key.get(2), Some(Letter::D));
    }

    #[test]
    fn block_without_number_marker_skipped() {
        let key = parse_answer_key("intro text\nans - A\n\n2] ok\nans - E").unwrap();
        assert_eq!(key.len(), 1);
        assert_eq!(key.get(2), Some(Letter::E));
    }

    #[test]
    fn letter_outside_a_to_e_not_matched() {
        let key = parse_answer_key("1] q\nans - F").unwrap();
        assert!(key.is_empty());
    }

    #[test]
    fn empty_solutions_yield_empty_key() {
        assert!(parse_answer_key("").unwrap().is_empty());
        assert!(parse_answer_key("\n\n\n\n").unwrap().is_empty());
    }

    #[test]
    fn parse_valid_questions() {
        let bank = parse_question_bank(
            "1. What is X? A. foo B. bar C. baz D. qux\n2. What is Y? A) p B) q C) r D) s",
        )
        .unwrap();
        assert_eq!(bank.len(), 2);

        let q1 = bank.get(1).unwrap();
        assert_eq!(q1.prompt, "What is X?");
        assert_eq!(q1.options[&Letter::A], "foo");
        assert_eq!(q1.options[&Letter::B], "bar");
        assert_eq!(q1.options[&Letter::C], "baz");
        assert_eq!(q1.options[&Letter::D], "qux");

        let q2 = bank.get(2).unwrap();
        assert_eq!(q2.prompt, "What is Y?");
        assert_eq!(q2.options[&Letter::D], "s");
    }

    #[test]
    fn question_spans_multiple_lines() {
        let bank = parse_question_bank(
            "3) Which service\nstores objects?\nA. EC2\nB. S3\nC. RDS\nD. SQS\n",
        )
        .unwrap();
        let q = bank.get(3).unwrap();
        assert_eq!(q.prompt, "Which service\nstores objects?");
        assert_eq!(q.options[&Letter::B], "S3");
    }

    #[test]
    fn option_letters_case_insensitive() {
        let bank = parse_question_bank("1. Pick one a. x b. y c. z d. w").unwrap();
        let q = bank.get(1).unwrap();
        assert_eq!(q.options[&Letter::A], "x");
        assert_eq!(q.options[&Letter::D], "w");
    }

    #[test]
    fn segment_missing_options_skipped() {
        let bank = parse_question_bank(
            "1. Incomplete A. only B. two\n2. Full A. a B. b C. c D. d",
        )
        .unwrap();
        assert_eq!(bank.len(), 1);
        assert!(bank.get(1).is_none());
        assert_eq!(bank.get(2).unwrap().prompt, "Full");
    }

    #[test]
    fn empty_questions_yield_empty_bank() {
        assert!(parse_question_bank("").unwrap().is_empty());
        assert!(parse_question_bank("no markers anywhere").unwrap().is_empty());
    }

    #[test]
    fn load_missing_file_is_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_answer_key(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, ParseError::FileAccess { .. }));
    }

    #[test]
    fn load_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let solutions = dir.path().join("solutions.txt");
        let questions = dir.path().join("questions.txt");
        std::fs::write(&solutions, "1] q\nans - A").unwrap();
        std::fs::write(&questions, "1. Prompt A. a B. b C. c D. d").unwrap();

        assert_eq!(load_answer_key(&solutions).unwrap().len(), 1);
        assert_eq!(load_question_bank(&questions).unwrap().len(), 1);
    }
}
