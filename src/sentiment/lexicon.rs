// Lexicon-based sentiment scorer — the default backend.
//
// Zero API calls, runs locally, no cost. A comment's polarity is the mean
// valence of its lexicon-matched words, with a sign flip after negators
// ("not great") and a boost after intensifiers ("very great"). Words the
// lexicon doesn't know contribute nothing, so a comment with no matches
// scores exactly 0.0 (neutral).
//
// The built-in lexicon is a compact English valence table compiled into
// the binary. A larger or domain-specific lexicon can be supplied as a
// tab-separated `word<TAB>valence` file (see `from_file`).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex_lite::Regex;
use tracing::info;

use super::traits::SentimentScorer;

/// Damping applied when a negator flips the following word's valence.
/// "not good" is negative, but less negative than "bad".
const NEGATION_DAMP: f64 = 0.75;

/// Boost applied to a valence word that follows an intensifier.
const INTENSIFIER_BOOST: f64 = 1.25;

/// Words that flip the sign of the valence word they precede.
const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "neither", "nor", "cannot", "without", "hardly", "barely",
];

/// Words that amplify the valence word they precede.
const INTENSIFIERS: &[&str] = &[
    "very", "really", "so", "extremely", "super", "totally", "absolutely", "incredibly",
];

/// Where a scorer's word table came from, for display in `moodring lexicon`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
    /// The compiled-in English valence table
    Builtin,
    /// A user-supplied lexicon file
    File(PathBuf),
}

impl std::fmt::Display for LexiconSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexiconSource::Builtin => write!(f, "built-in"),
            LexiconSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Lexicon-based polarity scorer.
#[derive(Debug)]
pub struct LexiconScorer {
    words: HashMap<String, f64>,
    source: LexiconSource,
    token_re: Regex,
}

impl LexiconScorer {
    /// Build the scorer from the compiled-in valence table.
    pub fn builtin() -> Self {
        let words = BUILTIN_LEXICON
            .iter()
            .map(|(word, valence)| (word.to_string(), *valence))
            .collect();
        Self::with_words(words, LexiconSource::Builtin)
    }

    /// Load a lexicon from a tab-separated `word<TAB>valence` file.
    ///
    /// Valences are expected in [-1.0, 1.0] and clamped to that range.
    /// Blank lines and lines starting with `#` are skipped. Extra
    /// tab-separated columns after the valence are ignored, so trimmed
    /// VADER-style lexicon files load as-is.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read lexicon file {}", path.display()))?;

        let mut words = HashMap::new();
        for (line_no, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            let word = fields.next().unwrap_or_default().trim();
            let valence = fields
                .next()
                .and_then(|v| v.trim().parse::<f64>().ok())
                .with_context(|| {
                    format!(
                        "malformed lexicon line {} in {}: expected `word<TAB>valence`",
                        line_no + 1,
                        path.display()
                    )
                })?;
            if word.is_empty() {
                anyhow::bail!(
                    "malformed lexicon line {} in {}: empty word",
                    line_no + 1,
                    path.display()
                );
            }
            words.insert(word.to_lowercase(), valence.clamp(-1.0, 1.0));
        }

        if words.is_empty() {
            anyhow::bail!("lexicon file {} contains no entries", path.display());
        }

        info!(
            entries = words.len(),
            path = %path.display(),
            "Loaded user lexicon"
        );

        Ok(Self::with_words(words, LexiconSource::File(path.to_path_buf())))
    }

    fn with_words(words: HashMap<String, f64>, source: LexiconSource) -> Self {
        Self {
            words,
            source,
            // Lowercase word runs, apostrophes kept so "don't" stays one token
            token_re: Regex::new(r"[a-z0-9']+").expect("token regex is valid"),
        }
    }

    /// Number of words in the lexicon.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the lexicon has no entries (never the case for `builtin`).
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn source(&self) -> &LexiconSource {
        &self.source
    }

    fn is_negator(token: &str) -> bool {
        NEGATORS.contains(&token) || token.ends_with("n't")
    }

    fn is_intensifier(token: &str) -> bool {
        INTENSIFIERS.contains(&token)
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<f64> {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = self
            .token_re
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .collect();

        let mut sum = 0.0;
        let mut matched = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&valence) = self.words.get(*token) else {
                continue;
            };

            let mut valence = valence;
            if i > 0 {
                let prev = tokens[i - 1];
                if Self::is_negator(prev) {
                    valence = -valence * NEGATION_DAMP;
                } else if Self::is_intensifier(prev) {
                    valence *= INTENSIFIER_BOOST;
                }
            }

            sum += valence;
            matched += 1;
        }

        if matched == 0 {
            return Ok(0.0);
        }

        Ok((sum / matched as f64).clamp(-1.0, 1.0))
    }
}

/// Default location for a user-supplied lexicon: the platform data dir
/// (e.g. ~/.local/share/moodring/lexicon.tsv on Linux).
pub fn default_lexicon_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("moodring")
        .join("lexicon.tsv")
}

/// Compact English valence table. Valences are hand-tuned on the social
/// comment corpora this tool is pointed at; all values are in [-1.0, 1.0].
#[rustfmt::skip]
const BUILTIN_LEXICON: &[(&str, f64)] = &[
    // strongly positive
    ("amazing", 0.85), ("awesome", 0.85), ("fantastic", 0.85), ("incredible", 0.8),
    ("excellent", 0.85), ("outstanding", 0.8), ("perfect", 0.9), ("wonderful", 0.8),
    ("brilliant", 0.8), ("stunning", 0.8), ("gorgeous", 0.8), ("love", 0.75),
    ("loved", 0.75), ("loves", 0.75), ("best", 0.8), ("beautiful", 0.75),
    ("adorable", 0.7), ("flawless", 0.8), ("magnificent", 0.8), ("phenomenal", 0.85),
    // positive
    ("great", 0.7), ("good", 0.55), ("nice", 0.5), ("happy", 0.6),
    ("glad", 0.5), ("cool", 0.45), ("fun", 0.5), ("enjoy", 0.55),
    ("enjoyed", 0.55), ("like", 0.4), ("liked", 0.4), ("likes", 0.4),
    ("sweet", 0.5), ("cute", 0.55), ("helpful", 0.5), ("impressive", 0.6),
    ("inspiring", 0.6), ("win", 0.5), ("winner", 0.55), ("winning", 0.5),
    ("congrats", 0.65), ("congratulations", 0.65), ("thanks", 0.5), ("thank", 0.5),
    ("appreciate", 0.5), ("recommend", 0.5), ("recommended", 0.5), ("favorite", 0.6),
    ("fav", 0.55), ("solid", 0.4), ("smooth", 0.4), ("fresh", 0.4),
    ("wow", 0.5), ("yay", 0.6), ("bravo", 0.6), ("goals", 0.45),
    ("fire", 0.6), ("lit", 0.55), ("slay", 0.6), ("queen", 0.45),
    ("king", 0.45), ("legend", 0.55), ("iconic", 0.6), ("vibes", 0.35),
    ("blessed", 0.55), ("proud", 0.55), ("excited", 0.55), ("smile", 0.45),
    ("smiling", 0.45), ("laugh", 0.45), ("hilarious", 0.55), ("funny", 0.45),
    // mildly positive
    ("fine", 0.25), ("decent", 0.25), ("interesting", 0.25), ("pretty", 0.3),
    ("better", 0.3), ("improved", 0.35), ("works", 0.2), ("worked", 0.2),
    // mildly negative
    ("meh", -0.25), ("boring", -0.35), ("bored", -0.35), ("slow", -0.25),
    ("weird", -0.2), ("odd", -0.2), ("confusing", -0.3), ("confused", -0.3),
    ("worse", -0.4), ("overrated", -0.4), ("cringe", -0.45), ("cringey", -0.45),
    ("annoying", -0.45), ("annoyed", -0.45), ("disappointing", -0.5),
    ("disappointed", -0.5), ("disappointment", -0.5), ("mediocre", -0.35),
    ("bland", -0.3), ("cheap", -0.25), ("fake", -0.4), ("spam", -0.4),
    // negative
    ("bad", -0.6), ("sad", -0.5), ("angry", -0.55), ("mad", -0.5),
    ("hate", -0.75), ("hated", -0.75), ("hates", -0.75), ("ugly", -0.6),
    ("gross", -0.6), ("nasty", -0.6), ("rude", -0.55), ("wrong", -0.4),
    ("broken", -0.5), ("fail", -0.55), ("failed", -0.55), ("failure", -0.6),
    ("lose", -0.45), ("loser", -0.6), ("lost", -0.4), ("waste", -0.55),
    ("wasted", -0.55), ("scam", -0.7), ("lies", -0.55), ("lie", -0.5),
    ("lying", -0.55), ("liar", -0.6), ("stupid", -0.6), ("dumb", -0.55),
    ("trash", -0.65), ("garbage", -0.65), ("toxic", -0.6), ("creepy", -0.55),
    ("unfollow", -0.45), ("unfollowing", -0.45), ("blocked", -0.45), ("report", -0.3),
    ("reported", -0.35), ("yikes", -0.4), ("ew", -0.5), ("eww", -0.5),
    ("smh", -0.35), ("ridiculous", -0.45), ("pathetic", -0.6), ("shame", -0.5),
    ("shameful", -0.55), ("embarrassing", -0.5), ("disgusting", -0.7),
    // strongly negative
    ("awful", -0.8), ("terrible", -0.8), ("horrible", -0.8), ("worst", -0.85),
    ("disaster", -0.7), ("dreadful", -0.75), ("atrocious", -0.8), ("vile", -0.8),
    ("appalling", -0.75), ("horrendous", -0.8), ("despise", -0.8), ("unbearable", -0.7),
];
