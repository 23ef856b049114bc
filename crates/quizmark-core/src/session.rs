//! Session controller: a cursor over a question bank plus the collected
//! responses.
//!
//! This is the state the presentation shell navigates with; all text logic
//! stays in the parsers and the grader. Loading a new bank means building a
//! new session, which discards any prior responses wholesale.

use crate::model::{Letter, Question, QuestionBank, ResponseSet};

#[derive(Debug)]
pub struct ExamSession {
    bank: QuestionBank,
    responses: ResponseSet,
    order: Vec<u32>,
    cursor: usize,
}

impl ExamSession {
    pub fn new(bank: QuestionBank) -> Self {
        let order = bank.numbers().collect();
        Self {
            bank,
            responses: ResponseSet::new(),
            order,
            cursor: 0,
        }
    }

    /// The question under the cursor, if the bank is non-empty.
    pub fn current(&self) -> Option<&Question> {
        self.order
            .get(self.cursor)
            .and_then(|number| self.bank.get(*number))
    }

    /// Move to the next question. Returns false (and stays put) at the end.
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 < self.order.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous question. Returns false (and stays put) at the
    /// start.
    pub fn back(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Put the cursor on `number`. Returns false if the bank has no such
    /// question.
    pub fn jump_to(&mut self, number: u32) -> bool {
        match self.order.iter().position(|n| *n == number) {
            Some(index) => {
                self.cursor = index;
                true
            }
            None => false,
        }
    }

    /// Record a choice for the question under the cursor, overwriting any
    /// prior choice. Returns false if the bank is empty.
    pub fn record_answer(&mut self, letter: Letter) -> bool {
        match self.order.get(self.cursor) {
            Some(number) => {
                self.responses.record(*number, letter);
                true
            }
            None => false,
        }
    }

    /// The recorded choice for the question under the cursor.
    pub fn answer_for_current(&self) -> Option<Letter> {
        self.order
            .get(self.cursor)
            .and_then(|number| self.responses.get(*number))
    }

    /// One-based cursor position and total question count; (0, 0) for an
    /// empty bank.
    pub fn progress(&self) -> (usize, usize) {
        if self.order.is_empty() {
            (0, 0)
        } else {
            (self.cursor + 1, self.order.len())
        }
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }
}
