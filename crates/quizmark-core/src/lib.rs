//! quizmark-core — parsing and grading for plain-text exams.
//!
//! This crate turns loosely structured, human-authored solutions and
//! question files into an in-memory model and grades submitted answers
//! against it.

pub mod error;
pub mod grade;
pub mod model;
pub mod parser;
pub mod session;
