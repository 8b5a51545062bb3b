// Polarity bucketing and the aggregate sentiment breakdown.
//
// A comment is positive above 0.1, negative below -0.1, neutral in the
// band between, and the boundaries themselves are neutral. The thresholds
// are fixed constants, not configuration.

use anyhow::Result;
use serde::Serialize;

/// Polarity strictly above this is positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Polarity strictly below this is negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Sentiment bucket for a single comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Bucket a polarity score. Boundary values (exactly 0.1 or -0.1) are
    /// neutral; NaN fails both comparisons and also lands in neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One comment with its computed polarity and assigned bucket.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredComment {
    pub text: String,
    pub polarity: f64,
    pub sentiment: Sentiment,
}

impl ScoredComment {
    pub fn new(text: String, polarity: f64) -> Self {
        let sentiment = Sentiment::from_polarity(polarity);
        Self {
            text,
            polarity,
            sentiment,
        }
    }
}

/// Raw per-bucket counts. Invariant: the three counts sum to the number of
/// comments that were scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentCounts {
    pub fn tally(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// Per-bucket percentages, each rounded to two decimals independently.
/// They need not sum to exactly 100.00.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentPercentages {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl SentimentPercentages {
    pub fn from_counts(counts: &SentimentCounts) -> Self {
        let total = counts.total();
        Self {
            positive: percentage(counts.positive, total),
            neutral: percentage(counts.neutral, total),
            negative: percentage(counts.negative, total),
        }
    }
}

/// The aggregate result of one analysis pass.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentBreakdown {
    pub total: usize,
    pub counts: SentimentCounts,
    pub percentages: SentimentPercentages,
}

/// Aggregate scored comments into counts and percentages.
///
/// Callers must short-circuit the empty case before scoring anything —
/// an empty slice here is a bug upstream, not a user error.
pub fn aggregate(scored: &[ScoredComment]) -> Result<SentimentBreakdown> {
    if scored.is_empty() {
        anyhow::bail!("no scored comments to aggregate — caller must handle the empty case");
    }

    let mut counts = SentimentCounts::default();
    for comment in scored {
        counts.tally(comment.sentiment);
    }

    Ok(SentimentBreakdown {
        total: scored.len(),
        counts,
        percentages: SentimentPercentages::from_counts(&counts),
    })
}

fn percentage(count: usize, total: usize) -> f64 {
    let raw = (count as f64 / total as f64) * 100.0;
    (raw * 100.0).round() / 100.0
}
