//! Mood Detector Lexicon Sentiment Source
//!
//! Implements the `SentimentSource` trait from `mood-domain` with a
//! word lexicon in the style of pattern-based adjective scoring.
//!
//! # Loading
//!
//! The lexicon is built once at process start with [`load_analyzer`] and then
//! shared read-only. Nothing is loaded lazily: a server must not accept
//! requests until this call has returned successfully.
//!
//! # Examples
//!
//! ```
//! use mood_lexicon::load_analyzer;
//! use mood_domain::SentimentSource;
//!
//! let analyzer = load_analyzer(None).unwrap();
//! let sentiment = analyzer.score("What a wonderful day").unwrap();
//! assert!(sentiment.polarity > 0.5);
//! ```

#![warn(missing_docs)]

pub mod analyzer;
pub mod error;
pub mod lexicon;

pub use analyzer::{Analysis, Assessment, LexiconAnalyzer};
pub use error::LexiconError;
pub use lexicon::{Lexicon, LexiconEntry};

use std::path::Path;
use tracing::info;

/// Build the analyzer: the built-in lexicon, with an optional extra lexicon
/// file merged over it
pub fn load_analyzer(extra_lexicon: Option<&Path>) -> Result<LexiconAnalyzer, LexiconError> {
    let mut lexicon = Lexicon::builtin()?;
    info!("Loaded built-in lexicon ({} entries)", lexicon.len());

    if let Some(path) = extra_lexicon {
        let extra = Lexicon::from_file(path)?;
        info!(
            "Merging extra lexicon from {} ({} entries)",
            path.display(),
            extra.len()
        );
        lexicon.merge(extra);
    }

    Ok(LexiconAnalyzer::new(lexicon))
}
