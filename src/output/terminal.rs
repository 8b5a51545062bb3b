// Colored terminal output for the sentiment breakdown.
//
// This module handles all terminal-specific formatting: colors, the
// category bar, example comments. The main.rs display logic delegates here.

use colored::{ColoredString, Colorize};

use crate::output::truncate_chars;
use crate::scoring::breakdown::{ScoredComment, Sentiment, SentimentBreakdown};

/// Width of the proportional category bar, in cells.
const BAR_WIDTH: usize = 40;

/// Display the aggregate breakdown: metrics, then the category bar.
pub fn display_breakdown(breakdown: &SentimentBreakdown) {
    println!(
        "\n{}",
        format!(
            "=== Sentiment Breakdown ({} comments) ===",
            breakdown.total
        )
        .bold()
    );
    println!();

    println!(
        "  {}  {:>6.2}%  ({})",
        colorize_label(Sentiment::Positive),
        breakdown.percentages.positive,
        breakdown.counts.positive,
    );
    println!(
        "  {}  {:>6.2}%  ({})",
        colorize_label(Sentiment::Neutral),
        breakdown.percentages.neutral,
        breakdown.counts.neutral,
    );
    println!(
        "  {}  {:>6.2}%  ({})",
        colorize_label(Sentiment::Negative),
        breakdown.percentages.negative,
        breakdown.counts.negative,
    );

    println!("\n  {}", category_bar(breakdown));
}

/// Display the strongest positive and negative example comments, if any.
pub fn display_examples(scored: &[ScoredComment]) {
    let most_positive = scored
        .iter()
        .filter(|c| c.sentiment == Sentiment::Positive)
        .max_by(|a, b| a.polarity.total_cmp(&b.polarity));
    let most_negative = scored
        .iter()
        .filter(|c| c.sentiment == Sentiment::Negative)
        .min_by(|a, b| a.polarity.total_cmp(&b.polarity));

    if most_positive.is_none() && most_negative.is_none() {
        return;
    }

    println!();
    if let Some(comment) = most_positive {
        println!(
            "  {} \"{}\"",
            format!("[{:+.2}]", comment.polarity).green(),
            truncate_chars(&comment.text, 80).dimmed(),
        );
    }
    if let Some(comment) = most_negative {
        println!(
            "  {} \"{}\"",
            format!("[{:+.2}]", comment.polarity).red(),
            truncate_chars(&comment.text, 80).dimmed(),
        );
    }
}

/// Display the polarity and bucket for a single scored text.
pub fn display_single_score(text: &str, polarity: f64, sentiment: Sentiment) {
    println!("\n  \"{}\"", truncate_chars(text, 100));
    println!("  Polarity:  {polarity:+.3}");
    println!("  Sentiment: {}", colorize_label(sentiment));
}

/// A stacked bar of colored cells, fixed order: positive, neutral, negative.
fn category_bar(breakdown: &SentimentBreakdown) -> String {
    let total = breakdown.total as f64;
    let positive_cells = (((breakdown.counts.positive as f64 / total) * BAR_WIDTH as f64).round()
        as usize)
        .min(BAR_WIDTH);
    let negative_cells = (((breakdown.counts.negative as f64 / total) * BAR_WIDTH as f64).round()
        as usize)
        .min(BAR_WIDTH - positive_cells);
    // Neutral absorbs the rounding remainder so the bar is always full width
    let neutral_cells = BAR_WIDTH - positive_cells - negative_cells;

    format!(
        "{}{}{}",
        "█".repeat(positive_cells).green(),
        "█".repeat(neutral_cells).blue(),
        "█".repeat(negative_cells).red(),
    )
}

fn colorize_label(sentiment: Sentiment) -> ColoredString {
    match sentiment {
        Sentiment::Positive => format!("{:<8}", "Positive").green().bold(),
        Sentiment::Neutral => format!("{:<8}", "Neutral").blue().bold(),
        Sentiment::Negative => format!("{:<8}", "Negative").red().bold(),
    }
}
