//! Integration tests for the lexicon sentiment source

use mood_domain::{classify, MoodLabel, SentimentScore, SentimentSource};
use mood_lexicon::{load_analyzer, LexiconError};
use proptest::prelude::*;
use std::io::Write;

#[test]
fn test_load_builtin_only() {
    let analyzer = load_analyzer(None).unwrap();
    assert!(!analyzer.lexicon().is_empty());
}

#[test]
fn test_extra_lexicon_extends_builtin() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"word": "bodacious", "polarity": 0.9, "subjectivity": 0.9}},
            {{"word": "happy", "polarity": 0.2, "subjectivity": 0.3}}
        ]"#
    )
    .unwrap();

    let analyzer = load_analyzer(Some(file.path())).unwrap();

    let raw = analyzer.score("bodacious").unwrap();
    assert_eq!(raw.polarity, 0.9);

    // Extra entries replace built-in ones
    let raw = analyzer.score("happy").unwrap();
    assert_eq!(raw.polarity, 0.2);
    assert_eq!(raw.subjectivity, 0.3);

    // Built-in words are still there
    assert!(analyzer.score("terrible").unwrap().polarity < 0.0);
}

#[test]
fn test_invalid_extra_lexicon_fails_startup() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"word": "broken", "polarity": -3.0, "subjectivity": 0.5}}]"#
    )
    .unwrap();

    let err = load_analyzer(Some(file.path())).unwrap_err();
    assert!(matches!(err, LexiconError::InvalidEntry { .. }));
}

#[test]
fn test_scoring_is_repeatable() {
    let analyzer = load_analyzer(None).unwrap();
    let text = "The food was great but the service was awful.";

    let first = analyzer.score(text).unwrap();
    let second = analyzer.score(text).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_probe_sentences_end_to_end() {
    let analyzer = load_analyzer(None).unwrap();
    let mood = |text: &str| {
        let score = SentimentScore::try_from(analyzer.score(text).unwrap()).unwrap();
        classify(&score).mood
    };

    assert_eq!(mood("I am so excited about this project!"), MoodLabel::Excited);
    assert_eq!(mood("The report is due on Tuesday."), MoodLabel::Neutral);
    assert_eq!(mood("This is not good."), MoodLabel::Sad);
}

#[test]
fn test_long_intensifier_runs_score_in_range() {
    let analyzer = load_analyzer(None).unwrap();
    let run = "extremely ".repeat(1800);

    let raw = analyzer.score(&format!("{run}happy {run}sad")).unwrap();
    let score = SentimentScore::try_from(raw).unwrap();
    assert!(score.polarity().abs() < 1e-9, "polarity {}", score.polarity());
    assert_eq!(score.subjectivity(), 1.0);

    let raw = analyzer.score(&format!("{run}awful")).unwrap();
    assert_eq!(raw.polarity, -1.0);
}

proptest! {
    /// Property: any text scores within the documented ranges
    #[test]
    fn test_scores_always_in_range(text in "\\PC{0,200}") {
        let analyzer = load_analyzer(None).unwrap();
        let raw = analyzer.score(&text).unwrap();
        prop_assert!(SentimentScore::try_from(raw).is_ok(), "out of range: {:?}", raw);
    }

    /// Property: text built from lexicon words also stays in range
    #[test]
    fn test_lexicon_word_soup_in_range(
        words in proptest::collection::vec(
            prop::sample::select(vec![
                "very", "not", "happy", "sad", "extremely", "awful", "great",
                "slightly", "never", "love", "hate", "!", ".",
            ]),
            0..400,
        )
    ) {
        let analyzer = load_analyzer(None).unwrap();
        let raw = analyzer.score(&words.join(" ")).unwrap();
        prop_assert!(SentimentScore::try_from(raw).is_ok(), "out of range: {:?}", raw);
    }
}
