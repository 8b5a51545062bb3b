// End-to-end composition tests: real files on disk, through the loader,
// the built-in lexicon, the pipeline, and report generation.

use std::fs::{self, File};
use std::io::Write;

use moodring::loader::load_comments;
use moodring::output::report::generate_report;
use moodring::pipeline;
use moodring::scoring::breakdown::Sentiment;
use moodring::sentiment::lexicon::LexiconScorer;

// One clearly positive, one clearly negative, one with no lexicon words
const POSITIVE_COMMENT: &str = "This is amazing, I love it!";
const NEGATIVE_COMMENT: &str = "Absolutely terrible, the worst.";
const NEUTRAL_COMMENT: &str = "It is a photo of a building.";

fn file_name(path: &std::path::Path) -> String {
    path.file_name().unwrap().to_str().unwrap().to_string()
}

#[test]
fn csv_file_to_breakdown() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("comments.csv");
    let mut file = File::create(&path).unwrap();
    writeln!(file, "comment,likes").unwrap();
    writeln!(file, "\"{POSITIVE_COMMENT}\",12").unwrap();
    writeln!(file, "\"{NEGATIVE_COMMENT}\",3").unwrap();
    writeln!(file, "\"{NEUTRAL_COMMENT}\",0").unwrap();
    drop(file);

    let comments = load_comments(File::open(&path).unwrap(), &file_name(&path)).unwrap();
    assert_eq!(comments.len(), 3);

    let scorer = LexiconScorer::builtin();
    let (scored, breakdown) = pipeline::run(&scorer, &comments).unwrap();

    assert_eq!(scored[0].sentiment, Sentiment::Positive);
    assert_eq!(scored[1].sentiment, Sentiment::Negative);
    assert_eq!(scored[2].sentiment, Sentiment::Neutral);

    assert_eq!(breakdown.total, 3);
    assert_eq!(breakdown.counts.total(), 3);
    assert_eq!(breakdown.percentages.positive, 33.33);
    assert_eq!(breakdown.percentages.neutral, 33.33);
    assert_eq!(breakdown.percentages.negative, 33.33);
}

#[test]
fn txt_file_to_breakdown() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("comments.txt");
    fs::write(
        &path,
        format!("{POSITIVE_COMMENT}\n\n  {NEGATIVE_COMMENT}  \n"),
    )
    .unwrap();

    let comments = load_comments(File::open(&path).unwrap(), &file_name(&path)).unwrap();
    assert_eq!(comments, vec![POSITIVE_COMMENT, NEGATIVE_COMMENT]);

    let scorer = LexiconScorer::builtin();
    let (_, breakdown) = pipeline::run(&scorer, &comments).unwrap();

    assert_eq!(breakdown.counts.positive, 1);
    assert_eq!(breakdown.counts.negative, 1);
    assert_eq!(breakdown.percentages.positive, 50.0);
    assert_eq!(breakdown.percentages.negative, 50.0);
}

#[test]
fn unsupported_file_collapses_into_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("comments.pdf");
    fs::write(&path, "not a real pdf").unwrap();

    let comments = load_comments(File::open(&path).unwrap(), &file_name(&path)).unwrap();
    assert!(comments.is_empty());

    // The empty sequence is the caller's short-circuit; the pipeline
    // refuses it outright.
    let scorer = LexiconScorer::builtin();
    assert!(pipeline::run(&scorer, &comments).is_err());
}

#[test]
fn report_file_contains_breakdown_and_palette() {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("out").join("report.md");

    let comments = vec![
        POSITIVE_COMMENT.to_string(),
        NEGATIVE_COMMENT.to_string(),
        NEUTRAL_COMMENT.to_string(),
    ];
    let scorer = LexiconScorer::builtin();
    let (scored, breakdown) = pipeline::run(&scorer, &comments).unwrap();

    let written = generate_report(&breakdown, &scored, "comments.csv", &report_path).unwrap();
    assert_eq!(written, report_path.display().to_string());

    let md = fs::read_to_string(&report_path).unwrap();
    assert!(md.contains("# Sentiment Breakdown"));
    assert!(md.contains("Comments analyzed: 3"));
    assert!(md.contains("33.33%"));
    // Fixed palette in fixed category order
    let positive_at = md.find("#00cc96").unwrap();
    let neutral_at = md.find("#636efa").unwrap();
    let negative_at = md.find("#ef553b").unwrap();
    assert!(positive_at < neutral_at && neutral_at < negative_at);
    // Strongest examples made it in
    assert!(md.contains(POSITIVE_COMMENT));
    assert!(md.contains(NEGATIVE_COMMENT));
}

#[test]
fn rerunning_the_full_pass_is_idempotent() {
    let comments = vec![
        POSITIVE_COMMENT.to_string(),
        NEGATIVE_COMMENT.to_string(),
        NEUTRAL_COMMENT.to_string(),
    ];
    let scorer = LexiconScorer::builtin();

    let (first_scored, first) = pipeline::run(&scorer, &comments).unwrap();
    let (second_scored, second) = pipeline::run(&scorer, &comments).unwrap();

    assert_eq!(first.counts, second.counts);
    assert_eq!(first.percentages, second.percentages);
    for (a, b) in first_scored.iter().zip(&second_scored) {
        assert_eq!(a.polarity, b.polarity);
        assert_eq!(a.sentiment, b.sentiment);
    }
}
