//! Lexicon-based sentiment scoring
//!
//! Each sentiment word found in the text produces one assessment. A pending
//! modifier ("very", "slightly") scales the word; a pending negation
//! multiplies its polarity by [`NEGATION_FACTOR`]. Sentence punctuation
//! clears anything pending. Each assessment is clamped to the score ranges,
//! and the text score is the mean of the assessments.

use crate::lexicon::Lexicon;
use mood_domain::{RawSentiment, SentimentSource, SourceError};
use std::sync::Arc;
use tracing::debug;

/// Applied to the polarity of a negated word
pub const NEGATION_FACTOR: f64 = -0.5;

/// Upper bound on a stacked modifier run ("very very extremely ...")
pub const MAX_INTENSITY: f64 = 4.0;

/// One scored word
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    /// Lowercased word as found in the text
    pub word: String,
    /// Polarity after modifiers and negation, in [-1.0, 1.0]
    pub polarity: f64,
    /// Subjectivity after modifiers, in [0.0, 1.0]
    pub subjectivity: f64,
    /// Whether a negation applied
    pub negated: bool,
}

/// Full scoring detail for a text
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Mean polarity, clamped to [-1.0, 1.0]
    pub polarity: f64,
    /// Mean subjectivity, clamped to [0.0, 1.0]
    pub subjectivity: f64,
    /// Words that contributed, in text order
    pub assessments: Vec<Assessment>,
}

impl Analysis {
    /// Reduce to the measurement handed to the classifier
    pub fn sentiment(&self) -> RawSentiment {
        RawSentiment::new(self.polarity, self.subjectivity)
    }
}

/// Sentiment source backed by a word lexicon
#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    lexicon: Arc<Lexicon>,
}

impl LexiconAnalyzer {
    /// Create an analyzer over a loaded lexicon
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
        }
    }

    /// The underlying lexicon
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score a text and keep the per-word detail
    pub fn analyze(&self, text: &str) -> Analysis {
        let mut assessments = Vec::new();
        let mut intensity = 1.0;
        let mut negate = false;

        for token in text.split_whitespace() {
            let word = normalize(token);

            if !word.is_empty() {
                if self.lexicon.is_negation(&word) {
                    negate = true;
                } else if let Some(entry) = self.lexicon.get(&word) {
                    if entry.is_modifier() {
                        intensity = (intensity * entry.intensity).min(MAX_INTENSITY);
                    } else {
                        let mut polarity = entry.polarity * intensity;
                        if negate {
                            polarity *= NEGATION_FACTOR;
                        }

                        assessments.push(Assessment {
                            word,
                            polarity: polarity.clamp(-1.0, 1.0),
                            subjectivity: (entry.subjectivity * intensity).clamp(0.0, 1.0),
                            negated: negate,
                        });

                        intensity = 1.0;
                        negate = false;
                    }
                }
            }

            if ends_sentence(token) {
                intensity = 1.0;
                negate = false;
            }
        }

        if assessments.is_empty() {
            return Analysis {
                polarity: 0.0,
                subjectivity: 0.0,
                assessments,
            };
        }

        let count = assessments.len() as f64;
        let polarity = assessments.iter().map(|a| a.polarity).sum::<f64>() / count;
        let subjectivity = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / count;

        Analysis {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
            assessments,
        }
    }
}

impl SentimentSource for LexiconAnalyzer {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn score(&self, text: &str) -> Result<RawSentiment, SourceError> {
        let analysis = self.analyze(text);
        debug!(
            "Lexicon matched {} words: polarity={:.3} subjectivity={:.3}",
            analysis.assessments.len(),
            analysis.polarity,
            analysis.subjectivity
        );
        Ok(analysis.sentiment())
    }
}

/// Lowercase a token and strip surrounding punctuation, keeping inner
/// apostrophes so contractions like "don't" survive
fn normalize(token: &str) -> String {
    token
        .replace('\u{2019}', "'")
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

fn ends_sentence(token: &str) -> bool {
    token.ends_with(['.', '!', '?', ';'])
}
