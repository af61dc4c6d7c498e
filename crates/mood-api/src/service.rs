//! Per-request mood pipeline.
//!
//! validate -> score -> range check -> classify. Holds the sentiment source
//! that was loaded at startup; nothing else is shared between requests.

use mood_domain::{
    classify, validate, DomainError, MoodResult, SentimentScore, SentimentSource, SourceError,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors surfaced by the mood pipeline
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ServiceError {
    /// Caller sent no usable text
    #[error("{0}")]
    InvalidInput(String),

    /// The sentiment source failed or broke its numeric contract
    #[error("Sentiment analysis failed: {0}")]
    CollaboratorFailure(String),
}

impl From<DomainError> for ServiceError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidInput(msg) => ServiceError::InvalidInput(msg),
            out_of_range @ DomainError::ScoreOutOfRange { .. } => {
                ServiceError::CollaboratorFailure(out_of_range.to_string())
            }
        }
    }
}

impl From<SourceError> for ServiceError {
    fn from(e: SourceError) -> Self {
        ServiceError::CollaboratorFailure(e.to_string())
    }
}

/// Classifies text using an injected sentiment source
#[derive(Clone)]
pub struct MoodService {
    source: Arc<dyn SentimentSource>,
}

impl MoodService {
    /// Create a service around a ready sentiment source
    pub fn new(source: Arc<dyn SentimentSource>) -> Self {
        Self { source }
    }

    /// Name of the sentiment source in use
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Score a text without classifying it
    ///
    /// The text is validated first and the source's output is range checked.
    pub fn score(&self, text: Option<&str>) -> Result<SentimentScore, ServiceError> {
        let text = validate(text)?;
        self.score_text(text)
    }

    /// Classify the mood of a text
    pub fn analyze(&self, text: Option<&str>) -> Result<MoodResult, ServiceError> {
        let text = validate(text)?;
        let score = self.score_text(text)?;
        let classification = classify(&score);

        debug!(
            "polarity={:.3} subjectivity={:.3} mood={} confidence={:.3}",
            score.polarity(),
            score.subjectivity(),
            classification.mood,
            classification.confidence
        );

        Ok(MoodResult::new(text, classification))
    }

    fn score_text(&self, text: &str) -> Result<SentimentScore, ServiceError> {
        let raw = self.source.score(text).map_err(|e| {
            warn!("Sentiment source '{}' failed: {}", self.source.name(), e);
            ServiceError::from(e)
        })?;

        SentimentScore::try_from(raw).map_err(|e| {
            warn!(
                "Sentiment source '{}' returned an invalid score: {}",
                self.source.name(),
                e
            );
            ServiceError::from(e)
        })
    }
}
