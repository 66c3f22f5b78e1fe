//! Parser for the sectioned lab input file.
//!
//! ```text
//! FREQUENCY TABLE
//! A 19
//! B 16
//! ENCODE
//! Sally sells sea shells
//! DECODE
//! 0101101
//! ```
//!
//! Headers are matched case-insensitively. Lines are trimmed and blank lines
//! ignored. Bad frequency lines are skipped with a warning.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::Normalization;
use crate::error::Result;
use crate::frequency::FrequencyTable;

/// Contents of an input file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabInput {
    /// The frequency section, or `None` if it was missing or empty.
    pub table: Option<FrequencyTable>,
    /// Phrases from the encode section.
    pub phrases: Vec<String>,
    /// Bit strings from the decode section.
    pub codes: Vec<String>,
    /// Number of lines that were ignored.
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Frequency,
    Encode,
    Decode,
}

fn header(line: &str) -> Option<Section> {
    match line.to_ascii_uppercase().as_str() {
        "FREQUENCY TABLE" => Some(Section::Frequency),
        "ENCODE" => Some(Section::Encode),
        "DECODE" => Some(Section::Decode),
        _ => None,
    }
}

/// Parse a `<symbol> <weight>` line.
fn frequency_line(line: &str) -> Option<(char, u64)> {
    let mut parts = line.split_whitespace();
    let (symbol, weight) = (parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let mut chars = symbol.chars();
    let c = chars.next()?;
    if chars.next().is_some() || !weight.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let weight = weight.parse().ok()?;
    Some((c, weight))
}

/// Parse input text. Frequency symbols go through `normalization.symbol`;
/// entries it filters out are skipped like malformed ones.
pub fn parse_input(text: &str, normalization: Normalization) -> LabInput {
    let mut table = FrequencyTable::new();
    let mut input = LabInput::default();
    let mut section = None;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(s) = header(line) {
            section = Some(s);
            continue;
        }
        let lineno = idx + 1;
        match section {
            Some(Section::Frequency) => {
                let parsed = frequency_line(line).and_then(|(c, w)| {
                    let symbol = normalization.symbol(c)?;
                    table.insert(symbol, w).ok()
                });
                if parsed.is_none() {
                    warn!(line = lineno, text = line, "skipping bad frequency entry");
                    input.skipped += 1;
                }
            }
            Some(Section::Encode) => input.phrases.push(line.to_string()),
            Some(Section::Decode) => input.codes.push(line.to_string()),
            None => {
                warn!(line = lineno, text = line, "skipping line outside any section");
                input.skipped += 1;
            }
        }
    }

    if !table.is_empty() {
        input.table = Some(table);
    }
    debug!(
        symbols = input.table.as_ref().map_or(0, FrequencyTable::len),
        phrases = input.phrases.len(),
        codes = input.codes.len(),
        skipped = input.skipped,
        "parsed input"
    );
    input
}

/// Read and parse an input file.
pub fn read_input(path: impl AsRef<Path>, normalization: Normalization) -> Result<LabInput> {
    let text = fs::read_to_string(path)?;
    Ok(parse_input(&text, normalization))
}
