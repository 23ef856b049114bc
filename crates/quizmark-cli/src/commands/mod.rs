pub mod grade;
pub mod inspect;
pub mod take;

use comfy_table::{Cell, Table};
use quizmark_core::grade::GradeReport;

/// Render a grade report the way the interactive results screen shows it.
pub(crate) fn print_report(report: &GradeReport) {
    println!("\nExam results ({})", report.created_at.format("%Y-%m-%d %H:%M UTC"));
    println!("Total questions: {}", report.total_questions);
    println!("Correct answers: {}", report.correct_answers);
    println!("Score: {:.2}%", report.score_percentage);

    if !report.mismatches.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Question", "Submitted", "Correct"]);
        for m in &report.mismatches {
            table.add_row(vec![
                Cell::new(m.question),
                Cell::new(m.submitted),
                Cell::new(m.correct),
            ]);
        }
        println!("\n{table}");
    }
}
