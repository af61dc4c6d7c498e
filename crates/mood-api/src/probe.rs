//! Offline mood probe for the `analyze` command.
//!
//! Runs the same pipeline as the HTTP endpoint but keeps the raw scores and
//! the lexicon words that produced them, for tuning a lexicon by hand.

use crate::service::ServiceError;
use mood_domain::{classify, validate, SentimentScore};
use mood_lexicon::LexiconAnalyzer;
use serde::Serialize;

/// Full detail for one probed text
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    /// Text as given
    pub text: String,
    /// Polarity in [-1.0, 1.0]
    pub polarity: f64,
    /// Subjectivity in [0.0, 1.0]
    pub subjectivity: f64,
    /// Detected mood label
    pub mood: String,
    /// Confidence in [0.5, 1.0]
    pub confidence: f64,
    /// Lexicon words that contributed, in text order
    pub matched_words: Vec<String>,
}

/// Probe runner over a loaded analyzer
pub struct Prober {
    analyzer: LexiconAnalyzer,
}

impl Prober {
    /// Wrap a loaded analyzer
    pub fn new(analyzer: LexiconAnalyzer) -> Self {
        Self { analyzer }
    }

    /// Score and classify one text
    ///
    /// Validation and range checks match the HTTP pipeline; the text is
    /// analyzed once and the same analysis supplies the matched words.
    pub fn probe(&self, text: &str) -> Result<ProbeReport, ServiceError> {
        let text = validate(Some(text))?;
        let analysis = self.analyzer.analyze(text);
        let score = SentimentScore::try_from(analysis.sentiment())?;
        let classification = classify(&score);

        Ok(ProbeReport {
            text: text.to_string(),
            polarity: score.polarity(),
            subjectivity: score.subjectivity(),
            mood: classification.mood.as_str().to_string(),
            confidence: classification.confidence,
            matched_words: analysis.assessments.into_iter().map(|a| a.word).collect(),
        })
    }
}

/// Human-readable block for one report
pub fn render_text(report: &ProbeReport) -> String {
    let words = if report.matched_words.is_empty() {
        "(none)".to_string()
    } else {
        report.matched_words.join(", ")
    };

    format!(
        "Text: {}\n\
         Polarity: {:.3} (Range: -1 to 1, negative to positive)\n\
         Subjectivity: {:.3} (Range: 0 to 1, objective to subjective)\n\
         Matched words: {}\n\
         Detected mood: {}\n\
         Confidence: {:.0}%\n\
         ---",
        report.text,
        report.polarity,
        report.subjectivity,
        words,
        report.mood,
        report.confidence * 100.0
    )
}
