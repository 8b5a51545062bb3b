// Classification and aggregation of per-comment polarity scores.

pub mod breakdown;
