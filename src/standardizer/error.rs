use thiserror::Error;

use crate::completion::CompletionError;

/// Why a model response could not be mapped back onto its batch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Response was empty")]
    Empty,

    #[error("Line {line_number} has no \". \" separator: {line:?}")]
    MissingSeparator { line_number: usize, line: String },

    #[error("Expected {expected} names, response had {actual}")]
    CountMismatch { expected: usize, actual: usize },
}

/// Failure of a single batch; the batch yields no names
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Completion failed: {0}")]
    Completion(#[from] CompletionError),

    #[error("Unparseable response: {0}")]
    Parse(#[from] ParseError),
}
