// Markdown report generation.
//
// Mirrors the terminal breakdown in a shareable file: counts/percentage
// table with the fixed chart palette, plus the strongest example comments.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use crate::output::{truncate_chars, NEGATIVE_HEX, NEUTRAL_HEX, POSITIVE_HEX};
use crate::scoring::breakdown::{ScoredComment, Sentiment, SentimentBreakdown};

/// Write a markdown report to `path`, creating parent directories as
/// needed. Returns the path it wrote to for display.
pub fn generate_report(
    breakdown: &SentimentBreakdown,
    scored: &[ScoredComment],
    source_name: &str,
    path: &Path,
) -> Result<String> {
    let mut md = String::new();

    writeln!(md, "# Sentiment Breakdown")?;
    writeln!(md)?;
    writeln!(md, "- Source: `{source_name}`")?;
    writeln!(md, "- Comments analyzed: {}", breakdown.total)?;
    writeln!(
        md,
        "- Generated: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(md)?;

    writeln!(md, "| Category | Count | Percent | Chart color |")?;
    writeln!(md, "|----------|------:|--------:|-------------|")?;
    writeln!(
        md,
        "| Positive | {} | {:.2}% | `{POSITIVE_HEX}` |",
        breakdown.counts.positive, breakdown.percentages.positive
    )?;
    writeln!(
        md,
        "| Neutral | {} | {:.2}% | `{NEUTRAL_HEX}` |",
        breakdown.counts.neutral, breakdown.percentages.neutral
    )?;
    writeln!(
        md,
        "| Negative | {} | {:.2}% | `{NEGATIVE_HEX}` |",
        breakdown.counts.negative, breakdown.percentages.negative
    )?;
    writeln!(md)?;

    let most_positive = scored
        .iter()
        .filter(|c| c.sentiment == Sentiment::Positive)
        .max_by(|a, b| a.polarity.total_cmp(&b.polarity));
    let most_negative = scored
        .iter()
        .filter(|c| c.sentiment == Sentiment::Negative)
        .min_by(|a, b| a.polarity.total_cmp(&b.polarity));

    if most_positive.is_some() || most_negative.is_some() {
        writeln!(md, "## Strongest examples")?;
        writeln!(md)?;
        if let Some(comment) = most_positive {
            writeln!(
                md,
                "- **{:+.2}** — {}",
                comment.polarity,
                truncate_chars(&comment.text, 200)
            )?;
        }
        if let Some(comment) = most_negative {
            writeln!(
                md,
                "- **{:+.2}** — {}",
                comment.polarity,
                truncate_chars(&comment.text, 200)
            )?;
        }
        writeln!(md)?;
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    fs::write(path, md).with_context(|| format!("failed to write {}", path.display()))?;

    Ok(path.display().to_string())
}
