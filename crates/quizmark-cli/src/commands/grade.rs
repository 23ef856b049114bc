//! The `quizmark grade` command.

use std::path::PathBuf;

use anyhow::Result;

use quizmark_core::grade;
use quizmark_core::model::ResponseSet;
use quizmark_core::parser;

pub fn execute(solutions: PathBuf, responses_path: PathBuf, format: String) -> Result<()> {
    let key = parser::load_answer_key(&solutions)?;

    // Responses use the same block format as the solutions file, so the
    // answer-key parser reads them too.
    let responses: ResponseSet = parser::load_answer_key(&responses_path)?.iter().collect();

    let report = grade::grade(&key, &responses);

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => super::print_report(&report),
    }

    Ok(())
}
