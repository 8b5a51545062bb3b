// Comment loading — turns an uploaded file into an ordered list of
// comment strings.
//
// Format is decided by the declared file name's extension, not by content
// sniffing. CSV exports keep only the first column (the comment text in
// every export format we've seen); plain text files are one comment per
// line. Anything else yields an empty list, which the caller reports as
// "no valid comments".

use std::io::Read;

use anyhow::{Context, Result};

/// Input format, derived from the declared file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Tabular export — first column holds the comment text
    Csv,
    /// Line-delimited plain text, one comment per line
    Text,
    /// Anything else — produces no comments
    Unsupported,
}

impl InputFormat {
    /// Classify a file name by its extension (case-insensitive).
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".csv") {
            InputFormat::Csv
        } else if lower.ends_with(".txt") {
            InputFormat::Text
        } else {
            InputFormat::Unsupported
        }
    }
}

/// Load comments from a reader, using `declared_name` to pick the format.
///
/// Returns comments in input order with empty entries dropped. An
/// unsupported extension returns an empty vec rather than an error — the
/// caller collapses that into its "no valid comments" message. Invalid
/// UTF-8 is an error for both formats.
pub fn load_comments<R: Read>(reader: R, declared_name: &str) -> Result<Vec<String>> {
    match InputFormat::from_name(declared_name) {
        InputFormat::Csv => load_csv(reader)
            .with_context(|| format!("failed to parse {declared_name} as CSV")),
        InputFormat::Text => load_text(reader)
            .with_context(|| format!("failed to read {declared_name} as UTF-8 text")),
        InputFormat::Unsupported => Ok(Vec::new()),
    }
}

/// First column of each record, header row skipped, empty cells dropped.
fn load_csv<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        // Exports from different tools disagree on trailing columns;
        // accept ragged rows instead of failing the whole file.
        .flexible(true)
        .from_reader(reader);

    let mut comments = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        if let Some(cell) = record.get(0) {
            if !cell.trim().is_empty() {
                comments.push(cell.to_string());
            }
        }
    }
    Ok(comments)
}

/// One comment per line, trimmed, blanks dropped.
fn load_text<R: Read>(mut reader: R) -> Result<Vec<String>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = std::str::from_utf8(&bytes).context("input is not valid UTF-8")?;

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
