//! Lexicon error types

use thiserror::Error;

/// Errors that can occur while loading a lexicon
#[derive(Error, Debug)]
pub enum LexiconError {
    /// Failed to read a lexicon file
    #[error("Failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),

    /// Lexicon data is not valid JSON
    #[error("Failed to parse lexicon JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// An entry violates the value ranges
    #[error("Invalid lexicon entry '{word}': {reason}")]
    InvalidEntry {
        /// Word of the rejected entry
        word: String,
        /// What was wrong with it
        reason: String,
    },
}
