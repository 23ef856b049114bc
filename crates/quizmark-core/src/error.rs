//! Parse error types.
//!
//! Defined in `quizmark-core` so the presentation shell can distinguish
//! file-access failures from pattern failures without string matching.
//! Individual malformed blocks or segments are never errors; the parsers
//! skip them.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort a parse call.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input file was missing, unreadable, or not valid UTF-8.
    #[error("failed to read {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An extraction pattern failed to compile. Fatal for the whole parse.
    #[error("extraction pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),
}
