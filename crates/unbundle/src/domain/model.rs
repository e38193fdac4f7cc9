//! Domain models for bundle headers, file sections, and index entries.

/// A `File: <path>` header block located in a bundle.
///
/// Offsets are byte positions into the bundle text. The content region runs
/// from `content_start` up to the next header's `start` (or the end of text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub path: String,
    pub start: usize,
    pub content_start: usize,
    pub content_end: usize,
}

impl Header {
    /// Borrow this header's section from the bundle it was parsed from.
    pub fn section<'a>(&'a self, text: &'a str) -> FileSection<'a> {
        FileSection {
            path: &self.path,
            content: &text[self.content_start..self.content_end],
        }
    }
}

/// Content belonging to one header, borrowed from the bundle text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSection<'a> {
    pub path: &'a str,
    pub content: &'a str,
}

/// A numbered `N. path` line from the index section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub number: u64,
    pub path: String,
}
