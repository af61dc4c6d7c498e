//! Word lexicon
//!
//! Maps lowercase words to polarity, subjectivity, and intensity. Words with
//! zero polarity and an intensity other than 1.0 are modifiers: they scale
//! the next sentiment word instead of being scored themselves.

use crate::error::LexiconError;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Lexicon data compiled into the crate
const BUILTIN_LEXICON: &str = include_str!("../data/lexicon.json");

/// Words that flip the polarity of the next sentiment word
const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "nobody", "nothing", "nowhere", "none", "cannot",
    "hardly", "barely", "scarcely", "without",
];

/// A single lexicon entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LexiconEntry {
    /// The word, matched case-insensitively
    pub word: String,

    /// Polarity in [-1.0, 1.0]
    pub polarity: f64,

    /// Subjectivity in [0.0, 1.0]
    pub subjectivity: f64,

    /// Multiplier applied to the following sentiment word when this entry
    /// is a modifier
    #[serde(default = "default_intensity")]
    pub intensity: f64,
}

fn default_intensity() -> f64 {
    1.0
}

impl LexiconEntry {
    /// Whether this entry scales the next word rather than carrying sentiment
    pub fn is_modifier(&self) -> bool {
        self.polarity == 0.0 && self.intensity != 1.0
    }

    fn validate(&self) -> Result<(), LexiconError> {
        let invalid = |reason: String| LexiconError::InvalidEntry {
            word: self.word.clone(),
            reason,
        };

        if self.word.trim().is_empty() {
            return Err(invalid("word is empty".to_string()));
        }
        if !(-1.0..=1.0).contains(&self.polarity) {
            return Err(invalid(format!("polarity {} outside [-1, 1]", self.polarity)));
        }
        if !(0.0..=1.0).contains(&self.subjectivity) {
            return Err(invalid(format!(
                "subjectivity {} outside [0, 1]",
                self.subjectivity
            )));
        }
        if !(self.intensity.is_finite() && self.intensity > 0.0) {
            return Err(invalid(format!("intensity {} must be positive", self.intensity)));
        }

        Ok(())
    }
}

/// Read-only word lexicon
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, LexiconEntry>,
    negations: HashSet<String>,
}

impl Lexicon {
    /// Load the built-in lexicon
    pub fn builtin() -> Result<Self, LexiconError> {
        Self::from_json_str(BUILTIN_LEXICON)
    }

    /// Parse a lexicon from a JSON array of entries
    pub fn from_json_str(json: &str) -> Result<Self, LexiconError> {
        let entries: Vec<LexiconEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Load a lexicon from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Build a lexicon from entries, validating each one
    ///
    /// Later entries replace earlier ones with the same word.
    pub fn from_entries(entries: Vec<LexiconEntry>) -> Result<Self, LexiconError> {
        let mut lexicon = Lexicon {
            entries: HashMap::with_capacity(entries.len()),
            negations: NEGATIONS.iter().map(|w| w.to_string()).collect(),
        };

        for entry in entries {
            lexicon.insert(entry)?;
        }

        Ok(lexicon)
    }

    /// Add or replace an entry
    pub fn insert(&mut self, mut entry: LexiconEntry) -> Result<(), LexiconError> {
        entry.validate()?;
        entry.word = entry.word.trim().to_lowercase();
        self.entries.insert(entry.word.clone(), entry);
        Ok(())
    }

    /// Merge another lexicon over this one; its entries win on conflict
    pub fn merge(&mut self, other: Lexicon) {
        self.entries.extend(other.entries);
        self.negations.extend(other.negations);
    }

    /// Look up a word (expects lowercase)
    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word)
    }

    /// Whether a word negates the next sentiment word (expects lowercase)
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.ends_with("n't")
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
