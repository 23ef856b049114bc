//! quizmark CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizmark", version, about = "Plain-text exam parsing and grading")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take an exam interactively
    Take {
        /// Path to the solutions file
        #[arg(long)]
        solutions: PathBuf,

        /// Path to the questions file
        #[arg(long)]
        questions: PathBuf,
    },

    /// Grade a responses file against a solutions file
    Grade {
        /// Path to the solutions file
        #[arg(long)]
        solutions: PathBuf,

        /// Responses file, in the same block format as the solutions file
        #[arg(long)]
        responses: PathBuf,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Parse input files and report what was extracted
    Inspect {
        /// Path to the solutions file
        #[arg(long)]
        solutions: PathBuf,

        /// Path to the questions file
        #[arg(long)]
        questions: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizmark=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Take {
            solutions,
            questions,
        } => commands::take::execute(solutions, questions),
        Commands::Grade {
            solutions,
            responses,
            format,
        } => commands::grade::execute(solutions, responses, format),
        Commands::Inspect {
            solutions,
            questions,
        } => commands::inspect::execute(solutions, questions),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
