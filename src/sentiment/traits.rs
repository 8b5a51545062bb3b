// Sentiment scorer trait — the swap-ready abstraction.
//
// The default implementation is the lexicon scorer in this crate. Anything
// that maps a string to a polarity (a different lexicon, cached scores, a
// model server) can stand in behind this trait without the aggregator
// noticing.

use anyhow::Result;

/// Trait for scoring the sentiment polarity of a piece of text.
pub trait SentimentScorer: Send + Sync {
    /// Score a single text. Returns a polarity in [-1.0, 1.0] where 1.0 is
    /// most positive and -1.0 most negative. Implementations must be
    /// deterministic: the same text always yields the same polarity.
    fn score(&self, text: &str) -> Result<f64>;
}
