//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::error::SourceError;
use crate::sentiment::RawSentiment;

/// Trait for turning raw text into a sentiment measurement
///
/// Implemented by the infrastructure layer (mood-lexicon). Implementations
/// are built once at startup and shared read-only across requests, so they
/// must be `Send + Sync`.
pub trait SentimentSource: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Score a piece of text
    ///
    /// The result is not trusted: callers convert it into a
    /// [`SentimentScore`](crate::sentiment::SentimentScore) before use.
    fn score(&self, text: &str) -> Result<RawSentiment, SourceError>;
}
