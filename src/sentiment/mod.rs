// Sentiment scoring — polarity in [-1.0, 1.0] per comment.

pub mod lexicon;
pub mod traits;
