use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::sentiment::lexicon;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Everything
/// has a working default — the tool runs with no configuration at all.
pub struct Config {
    /// Path to a user lexicon file (MOODRING_LEXICON env var).
    pub lexicon_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Ok(Self {
            lexicon_path: env::var("MOODRING_LEXICON").ok().map(PathBuf::from),
        })
    }

    /// Resolve which lexicon file to load, if any.
    ///
    /// An explicit MOODRING_LEXICON path always wins (and will error later
    /// if it doesn't exist — a misspelled path should not silently fall
    /// back to the built-in table). Otherwise the default data-dir location
    /// is used only when a file is actually there.
    pub fn resolve_lexicon_file(&self) -> Option<PathBuf> {
        if let Some(path) = &self.lexicon_path {
            return Some(path.clone());
        }
        let default = lexicon::default_lexicon_path();
        default.is_file().then_some(default)
    }
}
