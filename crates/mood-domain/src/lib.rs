//! Mood Detector Domain Layer
//!
//! This crate contains the decision logic of the mood detector: the mapping
//! from a sentiment measurement to a discrete mood label and a confidence
//! score. It performs no I/O and holds no state between calls.
//!
//! ## Key Concepts
//!
//! - **SentimentScore**: polarity in [-1, 1] and subjectivity in [0, 1]
//! - **MoodLabel**: closed set of moods (very happy, happy, neutral, sad,
//!   very sad, excited, angry)
//! - **Classifier**: polarity tier cascade, subjectivity override, confidence
//! - **Validator**: rejects absent or empty text before any scoring happens
//! - **SentimentSource**: the collaborator that turns text into a score
//!
//! ## Architecture
//!
//! - Pure business logic only
//! - Infrastructure (lexicon scoring, HTTP) lives in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classifier;
pub mod error;
pub mod mood;
pub mod result;
pub mod sentiment;
pub mod traits;
pub mod validation;

// Re-exports for convenience
pub use classifier::{classify, Classification};
pub use error::{DomainError, SourceError};
pub use mood::MoodLabel;
pub use result::MoodResult;
pub use sentiment::{RawSentiment, SentimentScore};
pub use traits::SentimentSource;
pub use validation::validate;
