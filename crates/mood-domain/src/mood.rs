//! Mood label module

use std::fmt;

/// Mood assigned to a piece of text
///
/// Exactly one label is assigned per request. The five polarity tiers come
/// from the base cascade; `Excited` and `Angry` only appear when a strongly
/// subjective text overrides a positive or negative tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoodLabel {
    /// Polarity above 0.5
    VeryHappy,

    /// Polarity in (0.1, 0.5]
    Happy,

    /// Polarity in (-0.1, 0.1]
    Neutral,

    /// Polarity in (-0.5, -0.1]
    Sad,

    /// Polarity at or below -0.5
    VerySad,

    /// Positive tier with high subjectivity
    Excited,

    /// Negative tier with high subjectivity
    Angry,
}

impl MoodLabel {
    /// Wire name of the label
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::VeryHappy => "very happy",
            MoodLabel::Happy => "happy",
            MoodLabel::Neutral => "neutral",
            MoodLabel::Sad => "sad",
            MoodLabel::VerySad => "very sad",
            MoodLabel::Excited => "excited",
            MoodLabel::Angry => "angry",
        }
    }

    /// Whether the label belongs to the positive group subject to the
    /// `Excited` override
    pub fn is_positive(&self) -> bool {
        matches!(self, MoodLabel::VeryHappy | MoodLabel::Happy)
    }

    /// Whether the label belongs to the negative group subject to the
    /// `Angry` override
    pub fn is_negative(&self) -> bool {
        matches!(self, MoodLabel::Sad | MoodLabel::VerySad)
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
