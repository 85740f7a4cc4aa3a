//! Chat item input for the CLI.
//!
//! Input is JSONL: one [`ChatItem`] per line, read from a file or from
//! stdin. Blank lines are ignored. A line that does not parse is collected
//! as an [`InputError::Parse`] and the remaining lines are still read; only
//! I/O failures abort reading.

use crate::model::error::InputError;
use crate::model::ChatItem;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use tracing::warn;

/// Where chat items are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A JSONL file.
    File(PathBuf),
    /// Piped standard input.
    Stdin,
}

impl InputSource {
    /// Open the source for line-by-line reading.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if the file cannot be opened.
    pub fn open(&self) -> Result<Box<dyn BufRead>, InputError> {
        match self {
            InputSource::File(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
            InputSource::Stdin => Ok(Box::new(BufReader::new(std::io::stdin()))),
        }
    }
}

/// Pick the input source.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if a file is given but does not exist.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) if !path.exists() => Err(InputError::FileNotFound { path }),
        Some(path) => Ok(InputSource::File(path)),
        None => Ok(InputSource::Stdin),
    }
}

/// Parse one JSONL line. `line_number` is 1-based and only used in errors.
///
/// # Errors
///
/// Returns `InputError::Parse` for malformed JSON, unknown kinds, and
/// out-of-range transfer progress.
pub fn parse_chat_item(raw: &str, line_number: usize) -> Result<ChatItem, InputError> {
    serde_json::from_str(raw).map_err(|e| InputError::Parse {
        line: line_number,
        reason: e.to_string(),
    })
}

/// A chat item together with its 0-based line index in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedItem {
    /// Line index in the input.
    pub index: usize,
    /// Parsed item.
    pub item: ChatItem,
}

/// Result of reading a whole input.
#[derive(Debug, Default)]
pub struct ReadOutcome {
    /// Items that parsed, in input order.
    pub items: Vec<IndexedItem>,
    /// Lines that did not parse.
    pub skipped: Vec<InputError>,
}

/// Read every chat item from `reader`.
///
/// # Errors
///
/// Returns `InputError::Io` when reading fails. Parse failures are reported
/// in [`ReadOutcome::skipped`] instead.
pub fn read_chat_items<R: BufRead>(reader: R) -> Result<ReadOutcome, InputError> {
    let mut outcome = ReadOutcome::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match parse_chat_item(trimmed, index + 1) {
            Ok(item) => outcome.items.push(IndexedItem { index, item }),
            Err(e) => {
                warn!(line = index + 1, error = %e, "skipping malformed chat item");
                outcome.skipped.push(e);
            }
        }
    }

    Ok(outcome)
}
