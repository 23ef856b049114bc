//! Core data model types for quizmark.
//!
//! These are the fundamental types the parsers, grader, and session
//! controller all build on: option letters, the answer key, the question
//! bank, and the test-taker's collected responses.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A multiple-choice option letter.
///
/// The key parser and the grader accept A through E. The bank parser only
/// ever extracts options A through D, so a five-option source question
/// silently loses its fifth option's text (a deliberate carry-over from the
/// source material this tool was built for).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
}

impl Letter {
    /// All letters the grader accepts, in order.
    pub const ALL: [Letter; 5] = [Letter::A, Letter::B, Letter::C, Letter::D, Letter::E];

    /// Parse a single character, case-insensitively.
    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            _ => None,
        }
    }

    /// The normalized (uppercase) character for this letter.
    pub fn as_char(self) -> char {
        match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Letter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next().and_then(Letter::from_char), chars.next()) {
            (Some(letter), None) => Ok(letter),
            _ => Err(format!("not an option letter: {s}")),
        }
    }
}

/// Correct answers keyed by question number. Built once by the answer-key
/// parser; immutable afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerKey {
    entries: BTreeMap<u32, Letter>,
}

impl AnswerKey {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The correct letter for `question`, if the key has one.
    pub fn get(&self, question: u32) -> Option<Letter> {
        self.entries.get(&question).copied()
    }

    /// Entries in ascending question-number order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Letter)> + '_ {
        self.entries.iter().map(|(n, l)| (*n, *l))
    }
}

impl FromIterator<(u32, Letter)> for AnswerKey {
    fn from_iter<I: IntoIterator<Item = (u32, Letter)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A single extracted question: number, trimmed prompt, and the option
/// texts keyed by letter (A through D only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub number: u32,
    pub prompt: String,
    pub options: BTreeMap<Letter, String>,
}

/// All questions extracted from a questions file, keyed by number. Built
/// once by the question-bank parser; immutable afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionBank {
    questions: BTreeMap<u32, Question>,
}

impl QuestionBank {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, number: u32) -> Option<&Question> {
        self.questions.get(&number)
    }

    /// Question numbers in ascending order.
    pub fn numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.questions.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.values()
    }
}

impl FromIterator<Question> for QuestionBank {
    fn from_iter<I: IntoIterator<Item = Question>>(iter: I) -> Self {
        Self {
            questions: iter.into_iter().map(|q| (q.number, q)).collect(),
        }
    }
}

/// The test-taker's submitted choices, in the order they were first given.
///
/// Re-answering a question overwrites the letter in place and keeps the
/// original position, so mismatch ordering in the grade report is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSet {
    entries: Vec<(u32, Letter)>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a choice for `question`, overwriting any prior choice.
    pub fn record(&mut self, question: u32, letter: Letter) {
        match self.entries.iter_mut().find(|(n, _)| *n == question) {
            Some((_, slot)) => *slot = letter,
            None => self.entries.push((question, letter)),
        }
    }

    pub fn get(&self, question: u32) -> Option<Letter> {
        self.entries
            .iter()
            .find(|(n, _)| *n == question)
            .map(|(_, l)| *l)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-answered order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Letter)> + '_ {
        self.entries.iter().copied()
    }
}

impl FromIterator<(u32, Letter)> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = (u32, Letter)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (question, letter) in iter {
            set.record(question, letter);
        }
        set
    }
}
