// Moodring: sentiment breakdown for social-media comment exports
//
// This is the library root. Each module corresponds to one stage of the
// analysis pass: load comments, score them, bucket them, display them.

pub mod config;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod sentiment;
