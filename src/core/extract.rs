//! Text extraction from word-list files.
//!
//! Word lists are scanned as plain text, not parsed as TypeScript. Every
//! `key: 'value'` or `key: "value"` occurrence contributes its value, and the
//! values of all files are merged into one order-preserving, duplicate-free
//! sequence.

use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{debug, warn};

/// Outcome of scanning the configured word files.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UniqueTexts {
    /// Distinct values in first-seen order.
    pub texts: Vec<String>,
    /// Word files that did not exist and were skipped.
    pub missing_files: Vec<PathBuf>,
}

/// Build the pattern matching `<key>: '<text>'` / `<key>: "<text>"`.
///
/// Quotes are not paired, and the captured text may contain neither quote.
pub fn key_pattern(key: &str) -> Result<Regex> {
    let pattern = format!(r#"{}:\s*['"]([^'"]+)['"]"#, regex::escape(key));
    Regex::new(&pattern).with_context(|| format!("Invalid extraction key: \"{}\"", key))
}

/// All captured values in file order, duplicates included.
pub fn extract_values(content: &str, pattern: &Regex) -> Vec<String> {
    pattern
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Keep the first occurrence of every value.
pub fn dedup_in_order<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

/// Read every word file in order and merge their values.
///
/// Missing files are recorded and skipped. Any other read error is fatal.
pub fn collect_unique_texts(paths: &[PathBuf], pattern: &Regex) -> Result<UniqueTexts> {
    let mut all_values = Vec::new();
    let mut missing_files = Vec::new();

    for path in paths {
        match read_word_file(path)? {
            Some(content) => {
                let values = extract_values(&content, pattern);
                debug!(file = %path.display(), count = values.len(), "extracted values");
                all_values.extend(values);
            }
            None => {
                warn!(file = %path.display(), "word file not found");
                missing_files.push(path.clone());
            }
        }
    }

    Ok(UniqueTexts {
        texts: dedup_in_order(all_values),
        missing_files,
    })
}

fn read_word_file(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => {
            Err(err).with_context(|| format!("Failed to read word file: {}", path.display()))
        }
    }
}
