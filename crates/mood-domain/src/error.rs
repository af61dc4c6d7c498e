//! Domain error types

use thiserror::Error;

/// Errors raised by domain operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Caller supplied no usable text
    #[error("{0}")]
    InvalidInput(String),

    /// A sentiment measurement fell outside its documented range
    #[error("{field} out of range [{min}, {max}]: {value}")]
    ScoreOutOfRange {
        /// Which component was rejected ("polarity" or "subjectivity")
        field: &'static str,
        /// The offending value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },
}

/// Errors reported by a [`SentimentSource`](crate::traits::SentimentSource)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    /// Scoring failed
    #[error("Sentiment scoring failed: {0}")]
    Failed(String),
}
