//! Sentiment measurement module

use crate::error::DomainError;

/// Polarity range: fully negative to fully positive
pub const POLARITY_RANGE: (f64, f64) = (-1.0, 1.0);

/// Subjectivity range: fully objective to fully subjective
pub const SUBJECTIVITY_RANGE: (f64, f64) = (0.0, 1.0);

/// Unchecked measurement as produced by a sentiment source
///
/// Nothing guarantees the values are in range; convert into a
/// [`SentimentScore`] before classifying.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSentiment {
    /// Polarity, expected in [-1.0, 1.0]
    pub polarity: f64,
    /// Subjectivity, expected in [0.0, 1.0]
    pub subjectivity: f64,
}

impl RawSentiment {
    /// Create a raw measurement
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity,
            subjectivity,
        }
    }
}

/// Validated sentiment measurement
///
/// Polarity is in [-1.0, 1.0] and subjectivity in [0.0, 1.0]; neither is NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    polarity: f64,
    subjectivity: f64,
}

impl SentimentScore {
    /// Create a score, rejecting values outside the documented ranges
    pub fn new(polarity: f64, subjectivity: f64) -> Result<Self, DomainError> {
        check_range("polarity", polarity, POLARITY_RANGE)?;
        check_range("subjectivity", subjectivity, SUBJECTIVITY_RANGE)?;

        Ok(Self {
            polarity,
            subjectivity,
        })
    }

    /// Polarity in [-1.0, 1.0]
    pub fn polarity(&self) -> f64 {
        self.polarity
    }

    /// Subjectivity in [0.0, 1.0]
    pub fn subjectivity(&self) -> f64 {
        self.subjectivity
    }
}

impl TryFrom<RawSentiment> for SentimentScore {
    type Error = DomainError;

    fn try_from(raw: RawSentiment) -> Result<Self, Self::Error> {
        SentimentScore::new(raw.polarity, raw.subjectivity)
    }
}

fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), DomainError> {
    // NaN fails both comparisons, so it lands here too
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(DomainError::ScoreOutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
