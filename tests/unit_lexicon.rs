// Unit tests for the lexicon scorer.
//
// Covers polarity range, neutrality of unknown text, negation and
// intensifier handling, determinism, and lexicon file loading.

use std::io::Write;

use moodring::sentiment::lexicon::{LexiconScorer, LexiconSource};
use moodring::sentiment::traits::SentimentScorer;

fn builtin() -> LexiconScorer {
    LexiconScorer::builtin()
}

// ============================================================
// Built-in lexicon — basic polarity
// ============================================================

#[test]
fn positive_text_scores_positive() {
    let score = builtin().score("I love this, absolutely amazing!").unwrap();
    assert!(score > 0.1, "expected positive polarity, got {score}");
}

#[test]
fn negative_text_scores_negative() {
    let score = builtin().score("This is awful and terrible").unwrap();
    assert!(score < -0.1, "expected negative polarity, got {score}");
}

#[test]
fn unknown_words_score_exactly_zero() {
    let score = builtin().score("the quorble snarfed a zib").unwrap();
    assert_eq!(score, 0.0);
}

#[test]
fn empty_text_scores_zero() {
    assert_eq!(builtin().score("").unwrap(), 0.0);
}

#[test]
fn punctuation_only_scores_zero() {
    assert_eq!(builtin().score("!!! ??? ...").unwrap(), 0.0);
}

#[test]
fn scoring_is_case_insensitive() {
    let scorer = builtin();
    assert_eq!(
        scorer.score("GREAT").unwrap(),
        scorer.score("great").unwrap()
    );
}

#[test]
fn polarity_stays_in_range() {
    let scorer = builtin();
    for text in [
        "amazing perfect phenomenal best wonderful",
        "worst awful terrible horrible vile",
        "very perfect",
        "absolutely atrocious",
    ] {
        let score = scorer.score(text).unwrap();
        assert!(
            (-1.0..=1.0).contains(&score),
            "{text:?} scored out of range: {score}"
        );
    }
}

#[test]
fn scoring_is_deterministic() {
    let scorer = builtin();
    let text = "pretty good but a bit boring";
    assert_eq!(scorer.score(text).unwrap(), scorer.score(text).unwrap());
}

// ============================================================
// Negation and intensifiers
// ============================================================

#[test]
fn negation_flips_polarity() {
    let score = builtin().score("not good").unwrap();
    assert!(score < -0.1, "expected 'not good' negative, got {score}");
}

#[test]
fn contraction_negation_flips_polarity() {
    let score = builtin().score("don't like").unwrap();
    assert!(score < -0.1, "expected \"don't like\" negative, got {score}");
}

#[test]
fn negated_negative_turns_positive() {
    let score = builtin().score("not bad").unwrap();
    assert!(score > 0.1, "expected 'not bad' positive, got {score}");
}

#[test]
fn intensifier_boosts_polarity() {
    let scorer = builtin();
    let plain = scorer.score("good").unwrap();
    let boosted = scorer.score("very good").unwrap();
    assert!(
        boosted > plain,
        "expected boost: very good {boosted} vs good {plain}"
    );
}

#[test]
fn negation_is_damped() {
    let scorer = builtin();
    let plain = scorer.score("great").unwrap();
    let negated = scorer.score("not great").unwrap();
    // Flip, but not a full mirror image
    assert!(negated < 0.0);
    assert!(negated.abs() < plain.abs());
}

// ============================================================
// Lexicon files
// ============================================================

#[test]
fn builtin_source_and_size() {
    let scorer = builtin();
    assert_eq!(*scorer.source(), LexiconSource::Builtin);
    assert!(!scorer.is_empty());
    assert!(scorer.len() > 100, "built-in lexicon is suspiciously small");
}

#[test]
fn from_file_loads_tab_separated_entries() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# test lexicon").unwrap();
    writeln!(file, "zibtastic\t0.9").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "quorbleful\t-0.8\textra\tcolumns\tignored").unwrap();

    let scorer = LexiconScorer::from_file(file.path()).unwrap();
    assert_eq!(scorer.len(), 2);
    assert_eq!(
        *scorer.source(),
        LexiconSource::File(file.path().to_path_buf())
    );
    assert!(scorer.score("so zibtastic").unwrap() > 0.1);
    assert!(scorer.score("utterly quorbleful").unwrap() < -0.1);
}

#[test]
fn from_file_clamps_out_of_range_valences() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mega\t5.0").unwrap();

    let scorer = LexiconScorer::from_file(file.path()).unwrap();
    assert_eq!(scorer.score("mega").unwrap(), 1.0);
}

#[test]
fn from_file_rejects_malformed_lines() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "good\t0.5").unwrap();
    writeln!(file, "orphanword").unwrap();

    let err = LexiconScorer::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("line 2"), "got: {err}");
}

#[test]
fn from_file_rejects_empty_lexicon() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# nothing but comments").unwrap();

    assert!(LexiconScorer::from_file(file.path()).is_err());
}

#[test]
fn from_file_missing_path_is_an_error() {
    let missing = std::path::Path::new("/nonexistent/lexicon.tsv");
    assert!(LexiconScorer::from_file(missing).is_err());
}
