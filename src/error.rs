use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::parser::AMOUNT_OF_RESULTS;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("line {line}: expected {expected}, found `{found}`")]
    UnexpectedToken { line: usize, expected: &'static str, found: String },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("line {line}: auto-check flag must be `0` or `1`, found `{found}`")]
    InvalidFlag { line: usize, found: String },

    #[error("test `{label}`: expected {} results, found {found}", AMOUNT_OF_RESULTS)]
    ResultCount { label: String, found: usize },

    /// Native arithmetic could not produce the expected results.
    #[error("test `{label}`: cannot auto-check, {reason}")]
    AutoCheck { label: String, reason: String },

    #[error("failed to access `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
