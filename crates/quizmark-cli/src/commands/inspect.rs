//! The `quizmark inspect` command.

use std::path::PathBuf;

use anyhow::Result;

use quizmark_core::parser;

pub fn execute(solutions: PathBuf, questions: Option<PathBuf>) -> Result<()> {
    let key = parser::load_answer_key(&solutions)?;
    println!("Answer key: {} entries", key.len());

    let Some(questions_path) = questions else {
        return Ok(());
    };

    let bank = parser::load_question_bank(&questions_path)?;
    println!("Question bank: {} questions", bank.len());

    let mut warnings = 0;
    for number in bank.numbers() {
        if key.get(number).is_none() {
            println!("  [{number}] WARNING: question has no answer key entry");
            warnings += 1;
        }
    }
    for (number, _) in key.iter() {
        if bank.get(number).is_none() {
            println!("  [{number}] WARNING: answer key entry has no question");
            warnings += 1;
        }
    }

    if warnings == 0 {
        println!("Key and questions are consistent.");
    } else {
        println!("\n{warnings} warning(s) found.");
    }

    Ok(())
}
