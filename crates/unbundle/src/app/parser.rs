//! Bundle header scanning and section splitting.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::errors::BundleError;
use crate::domain::model::{FileSection, Header};

/// Delimiter line, `File: <path>` line, delimiter line. Delimiters are ten or
/// more `=` and lines may end in `\n` or `\r\n`.
static HEADER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^={10,}\r?\nFile: (?P<path>.+?)\r?\n={10,}\r?\n")
        .expect("header pattern is valid")
});

/// A header match whose path still borrows from the bundle text.
struct RawHeader<'a> {
    path: &'a str,
    start: usize,
    content_start: usize,
    content_end: usize,
}

impl RawHeader<'_> {
    fn to_header(&self) -> Header {
        Header {
            path: self.path.to_string(),
            start: self.start,
            content_start: self.content_start,
            content_end: self.content_end,
        }
    }
}

fn scan(text: &str) -> Vec<RawHeader<'_>> {
    let mut headers: Vec<RawHeader<'_>> = Vec::new();

    for caps in HEADER_PATTERN.captures_iter(text) {
        let (Some(whole), Some(path)) = (caps.get(0), caps.name("path")) else {
            continue;
        };
        if let Some(previous) = headers.last_mut() {
            previous.content_end = whole.start();
        }
        headers.push(RawHeader {
            path: path.as_str().trim(),
            start: whole.start(),
            content_start: whole.end(),
            content_end: text.len(),
        });
    }

    headers
}

/// Scan the bundle for every header, in order. May return an empty list.
pub fn scan_headers(text: &str) -> Vec<Header> {
    scan(text).iter().map(RawHeader::to_header).collect()
}

/// Scan the bundle for headers, treating an empty result as a malformed bundle.
pub fn parse_headers(text: &str) -> Result<Vec<Header>, BundleError> {
    let headers = scan_headers(text);
    if headers.is_empty() {
        return Err(BundleError::EmptyBundle);
    }
    tracing::debug!(count = headers.len(), "parsed bundle headers");
    Ok(headers)
}

/// Split the bundle into per-file sections in bundle order.
pub fn parse_sections(text: &str) -> Result<Vec<FileSection<'_>>, BundleError> {
    let headers = scan(text);
    if headers.is_empty() {
        return Err(BundleError::EmptyBundle);
    }
    Ok(headers
        .into_iter()
        .map(|raw| FileSection {
            path: raw.path,
            content: &text[raw.content_start..raw.content_end],
        })
        .collect())
}

/// Byte offset where the first header begins, if any.
pub fn first_header_start(text: &str) -> Option<usize> {
    HEADER_PATTERN.find(text).map(|found| found.start())
}
