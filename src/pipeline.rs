// The analysis pass: score every comment, then aggregate.
//
// Sequential and synchronous — one comment at a time against the scorer,
// with a progress bar so large exports don't look hung.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::scoring::breakdown::{self, ScoredComment, SentimentBreakdown};
use crate::sentiment::traits::SentimentScorer;

/// Score `comments` in order and aggregate the results.
///
/// Bails if `comments` is empty — the caller is expected to have reported
/// "no valid comments" before getting here.
pub fn run(
    scorer: &dyn SentimentScorer,
    comments: &[String],
) -> Result<(Vec<ScoredComment>, SentimentBreakdown)> {
    if comments.is_empty() {
        anyhow::bail!("no comments to analyze");
    }

    let pb = ProgressBar::new(comments.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Scoring [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    let mut scored = Vec::with_capacity(comments.len());
    for comment in comments {
        let polarity = scorer.score(comment)?;
        scored.push(ScoredComment::new(comment.clone(), polarity));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let summary = breakdown::aggregate(&scored)?;

    info!(
        total = summary.total,
        positive = summary.counts.positive,
        neutral = summary.counts.neutral,
        negative = summary.counts.negative,
        "Scored comments"
    );

    Ok((scored, summary))
}
