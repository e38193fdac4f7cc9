//! Index section isolation and `N. path` entry parsing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::app::parser;
use crate::domain::errors::BundleError;
use crate::domain::model::IndexEntry;

pub const INDEX_MARKER: &str = "INDEX:";

static ENTRY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(?P<number>\d+)\.[ \t]+(?P<path>.+?)[ \t\r]*$")
        .expect("index entry pattern is valid")
});

/// Return the text strictly between the `INDEX:` marker and the first header.
///
/// A marker that only appears after the first header yields an empty section,
/// since nothing past the first header is ever treated as index text.
pub fn index_section(text: &str) -> Result<&str, BundleError> {
    let marker = text
        .find(INDEX_MARKER)
        .ok_or(BundleError::IndexMarkerMissing)?;
    let first = parser::first_header_start(text).ok_or(BundleError::NoHeaders)?;

    let start = marker + INDEX_MARKER.len();
    if start > first {
        tracing::warn!(
            marker = marker,
            first_header = first,
            "index marker appears after the first header"
        );
        return Ok("");
    }
    Ok(&text[start..first])
}

/// Parse every `N. path` line in the provided index section.
pub fn parse_index_entries(section: &str) -> Vec<IndexEntry> {
    ENTRY_PATTERN
        .captures_iter(section)
        .filter_map(|caps| {
            let path = caps.name("path")?.as_str().trim();
            if path.is_empty() {
                return None;
            }
            // Numbers too large for u64 are still listed; only the path matters.
            let number = caps.name("number")?.as_str().parse().unwrap_or(u64::MAX);
            Some(IndexEntry {
                number,
                path: path.to_string(),
            })
        })
        .collect()
}

/// Isolate the index section and parse its entries.
pub fn parse_index(text: &str) -> Result<Vec<IndexEntry>, BundleError> {
    let section = index_section(text)?;
    let entries = parse_index_entries(section);
    tracing::debug!(count = entries.len(), "parsed index entries");
    Ok(entries)
}
