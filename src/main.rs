use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use moodring::config::Config;
use moodring::scoring::breakdown::Sentiment;
use moodring::sentiment::lexicon::LexiconScorer;
use moodring::sentiment::traits::SentimentScorer;

/// Moodring: sentiment breakdown for social-media comment exports.
///
/// Point it at a .csv (comments in the first column) or .txt (one comment
/// per line) file and get positive/neutral/negative counts and percentages.
#[derive(Parser)]
#[command(name = "moodring", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a comment file and print the sentiment breakdown
    Analyze {
        /// Path to a .csv or .txt comment file
        file: PathBuf,

        /// Print the breakdown as JSON instead of the terminal display
        #[arg(long)]
        json: bool,

        /// Also write a markdown report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Score a single piece of text and show its polarity and bucket
    Score {
        /// The text to score
        text: String,
    },

    /// Show which lexicon is active and how many entries it has
    Lexicon,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("moodring=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { file, json, report } => {
            let config = Config::load()?;
            let scorer = create_scorer(&config)?;

            let file_name = file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            let handle =
                File::open(&file).with_context(|| format!("failed to open {}", file.display()))?;

            let comments = moodring::loader::load_comments(handle, &file_name)?;
            if comments.is_empty() {
                anyhow::bail!(
                    "No valid comments found in {}.\n\
                     Supported formats: .csv (comments in the first column) or \
                     .txt (one comment per line).",
                    file.display()
                );
            }

            if !json {
                println!("Analyzing {} comments...", comments.len());
            }

            let (scored, breakdown) = moodring::pipeline::run(&scorer, &comments)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else {
                moodring::output::terminal::display_breakdown(&breakdown);
                moodring::output::terminal::display_examples(&scored);
            }

            if let Some(report_path) = report {
                let written = moodring::output::report::generate_report(
                    &breakdown,
                    &scored,
                    &file_name,
                    &report_path,
                )?;
                println!("\n{}", format!("Markdown report saved to: {written}").bold());
            }
        }

        Commands::Score { text } => {
            let config = Config::load()?;
            let scorer = create_scorer(&config)?;

            let polarity = scorer.score(&text)?;
            let sentiment = Sentiment::from_polarity(polarity);
            moodring::output::terminal::display_single_score(&text, polarity, sentiment);
        }

        Commands::Lexicon => {
            let config = Config::load()?;
            let scorer = create_scorer(&config)?;

            println!("Lexicon: {}", scorer.source());
            println!("Entries: {}", scorer.len());
            if matches!(
                scorer.source(),
                moodring::sentiment::lexicon::LexiconSource::Builtin
            ) {
                println!(
                    "\nTo use a custom lexicon, set {} to a `word<TAB>valence` file,",
                    "MOODRING_LEXICON".bold()
                );
                println!(
                    "or place one at {}.",
                    moodring::sentiment::lexicon::default_lexicon_path().display()
                );
            }
        }
    }

    Ok(())
}

/// Create the sentiment scorer: a user lexicon file when one is configured
/// or present in the default location, the built-in table otherwise.
fn create_scorer(config: &Config) -> Result<LexiconScorer> {
    match config.resolve_lexicon_file() {
        Some(path) => {
            info!(path = %path.display(), "Using user lexicon");
            LexiconScorer::from_file(&path)
        }
        None => {
            info!("Using built-in lexicon");
            Ok(LexiconScorer::builtin())
        }
    }
}
