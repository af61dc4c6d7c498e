//! Mood result module

use crate::classifier::Classification;
use crate::mood::MoodLabel;

/// Response to one mood request: the submitted text with its mood
#[derive(Debug, Clone, PartialEq)]
pub struct MoodResult {
    /// Text exactly as submitted
    pub text: String,
    /// Final mood label
    pub mood: MoodLabel,
    /// Confidence in [0.5, 1.0]
    pub confidence: f64,
}

impl MoodResult {
    /// Attach a classification to the text it was computed for
    pub fn new(text: impl Into<String>, classification: Classification) -> Self {
        Self {
            text: text.into(),
            mood: classification.mood,
            confidence: classification.confidence,
        }
    }
}
