use crate::constraints::WordConstraints;
use serde::Deserialize;
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Indicates that an error occurred while loading the data needed to solve, or while reading
/// user-provided feedback.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Indicates that the dictionary files could not be read.
    #[error("dictionary file {} could not be read: {source}", path.display())]
    DictionaryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Indicates that the dictionary data could not be parsed.
    #[error("invalid dictionary data on line {line}: {message}")]
    DictionaryFormat { line: usize, message: String },
    /// Indicates that the word list could not be read.
    #[error("word list {} could not be read: {source}", path.display())]
    WordListUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Indicates that the word list could not be parsed.
    #[error("invalid word list: {0}")]
    WordListFormat(String),
    /// Indicates that guess feedback didn't describe a valid guess result.
    #[error("invalid feedback: {0}")]
    InvalidFeedback(String),
}

/// The words that satisfy a set of constraints.
///
/// This is also the wire format used by callers that serve results as JSON, which is why it
/// carries the redundant `success` and `count` fields and echoes back the constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResult {
    /// Always `true` for a returned result. Failures are reported as [`SolverError`]s instead.
    pub success: bool,
    /// The matching words, in the order the word source produced them.
    pub words: Vec<String>,
    pub count: usize,
    /// The constraints that the words were matched against.
    pub constraints: WordConstraints,
}

impl SolveResult {
    /// Creates a successful result for the given matches.
    pub fn new(words: Vec<String>, constraints: WordConstraints) -> SolveResult {
        SolveResult {
            success: true,
            count: words.len(),
            words,
            constraints,
        }
    }
}
