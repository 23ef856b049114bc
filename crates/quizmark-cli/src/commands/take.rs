//! The `quizmark take` command: an interactive exam session.
//!
//! One question at a time over stdin/stdout. `a`-`e` select an option,
//! `n`/`p` move, `g <n>` jumps, `s` submits, `q` quits without grading.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use quizmark_core::grade;
use quizmark_core::model::{AnswerKey, Letter};
use quizmark_core::parser;
use quizmark_core::session::ExamSession;

const HELP: &str = "Commands: a-e select an option, n/p move, g <n> jump, s submit, q quit";

pub fn execute(solutions: PathBuf, questions: PathBuf) -> Result<()> {
    let key = parser::load_answer_key(&solutions)?;
    let bank = parser::load_question_bank(&questions)?;
    anyhow::ensure!(
        !bank.is_empty(),
        "no questions could be extracted from {}",
        questions.display()
    );

    let mut session = ExamSession::new(bank);
    println!("Loaded {} questions. {HELP}", session.bank().len());

    run(&mut session, &key)
}

fn run(session: &mut ExamSession, key: &AnswerKey) -> Result<()> {
    print_question(session)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        let mut parts = input.split_whitespace();
        match parts.next() {
            None => {}
            Some("n") | Some("next") => {
                if !session.advance() {
                    println!("Already at the last question.");
                }
            }
            Some("p") | Some("prev") => {
                if !session.back() {
                    println!("Already at the first question.");
                }
            }
            Some("g") | Some("goto") => match parts.next().map(str::parse::<u32>) {
                Some(Ok(number)) => {
                    if !session.jump_to(number) {
                        println!("No question {number}.");
                    }
                }
                _ => println!("Usage: g <question number>"),
            },
            Some("s") | Some("submit") => {
                if session.responses().is_empty() {
                    println!("No answers to submit yet.");
                } else {
                    let report = grade::grade(key, session.responses());
                    super::print_report(&report);
                    return Ok(());
                }
            }
            Some("q") | Some("quit") => {
                println!("Session discarded.");
                return Ok(());
            }
            Some(word) => match word.parse::<Letter>() {
                Ok(letter) => {
                    session.record_answer(letter);
                }
                Err(_) => println!("{HELP}"),
            },
        }

        print_question(session)?;
    }

    // stdin closed without a submit; nothing is persisted.
    Ok(())
}

fn print_question(session: &ExamSession) -> Result<()> {
    let Some(question) = session.current() else {
        return Ok(());
    };
    let (position, total) = session.progress();

    println!("\nQuestion {} ({position}/{total})", question.number);
    println!("{}", question.prompt);
    for (letter, text) in &question.options {
        println!("  {letter}. {text}");
    }
    if let Some(chosen) = session.answer_for_current() {
        println!("  [selected: {chosen}]");
    }
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}
