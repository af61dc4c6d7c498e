//! Mood classification
//!
//! Three steps, each exposed separately so the boundaries can be checked
//! on their own:
//! 1. Base mood from polarity, an ordered strict-greater-than cascade
//! 2. Subjectivity override for the positive and negative groups
//! 3. Confidence from subjectivity alone

use crate::error::DomainError;
use crate::mood::MoodLabel;
use crate::sentiment::SentimentScore;

/// Polarity tiers, evaluated top to bottom; the first threshold that the
/// polarity strictly exceeds wins
pub const POLARITY_TIERS: [(f64, MoodLabel); 4] = [
    (0.5, MoodLabel::VeryHappy),
    (0.1, MoodLabel::Happy),
    (-0.1, MoodLabel::Neutral),
    (-0.5, MoodLabel::Sad),
];

/// Mood when no tier threshold is exceeded
pub const FLOOR_MOOD: MoodLabel = MoodLabel::VerySad;

/// Subjectivity must strictly exceed this for the override to fire
pub const OVERRIDE_THRESHOLD: f64 = 0.7;

/// Confidence reported for fully objective text
pub const CONFIDENCE_FLOOR: f64 = 0.5;

/// Confidence gained per unit of subjectivity
pub const CONFIDENCE_SLOPE: f64 = 0.5;

/// Outcome of classifying one sentiment score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Final mood after the override step
    pub mood: MoodLabel,
    /// Confidence in [0.5, 1.0]
    pub confidence: f64,
}

/// Step 1: map polarity to one of the five tier moods
///
/// Values beyond [-1, 1] still land on the top or bottom tier.
pub fn base_mood(polarity: f64) -> MoodLabel {
    POLARITY_TIERS
        .iter()
        .find(|(threshold, _)| polarity > *threshold)
        .map(|(_, mood)| *mood)
        .unwrap_or(FLOOR_MOOD)
}

/// Step 2: replace a positive or negative tier when the text is strongly
/// subjective. Neutral is never overridden.
pub fn apply_subjectivity_override(base: MoodLabel, subjectivity: f64) -> MoodLabel {
    if subjectivity <= OVERRIDE_THRESHOLD {
        return base;
    }

    if base.is_positive() {
        MoodLabel::Excited
    } else if base.is_negative() {
        MoodLabel::Angry
    } else {
        base
    }
}

/// Step 3: confidence from subjectivity
pub fn confidence(subjectivity: f64) -> f64 {
    CONFIDENCE_FLOOR + subjectivity * CONFIDENCE_SLOPE
}

/// Classify a validated sentiment score
pub fn classify(score: &SentimentScore) -> Classification {
    let base = base_mood(score.polarity());
    let mood = apply_subjectivity_override(base, score.subjectivity());

    Classification {
        mood,
        confidence: confidence(score.subjectivity()),
    }
}

/// Classify unvalidated values, failing on anything outside the score ranges
pub fn try_classify(polarity: f64, subjectivity: f64) -> Result<Classification, DomainError> {
    let score = SentimentScore::new(polarity, subjectivity)?;
    Ok(classify(&score))
}
