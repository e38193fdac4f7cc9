//! Assembling files into the flat-text bundle format.

use std::fmt::Write as _;

/// Width of the `=` delimiter lines written around each header.
pub const DELIMITER_WIDTH: usize = 80;

/// Builds a bundle: an `INDEX:` listing followed by one header and content
/// block per file, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct BundleWriter {
    files: Vec<(String, String)>,
    indexed_only: Vec<String>,
}

impl BundleWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file with its content.
    pub fn add_file(&mut self, path: impl Into<String>, contents: impl Into<String>) -> &mut Self {
        self.files.push((path.into(), contents.into()));
        self
    }

    /// List a path in the index without emitting a content section for it.
    pub fn add_index_only(&mut self, path: impl Into<String>) -> &mut Self {
        self.indexed_only.push(path.into());
        self
    }

    pub fn render(&self) -> String {
        let delimiter = "=".repeat(DELIMITER_WIDTH);
        let mut out = String::from("INDEX:\n");

        let listed = self
            .files
            .iter()
            .map(|(path, _)| path)
            .chain(self.indexed_only.iter());
        for (number, path) in listed.enumerate() {
            let _ = writeln!(out, "{}. {path}", number + 1);
        }
        out.push('\n');

        for (path, contents) in &self.files {
            let _ = write!(out, "{delimiter}\nFile: {path}\n{delimiter}\n{contents}");
            if !contents.is_empty() && !contents.ends_with('\n') {
                out.push('\n');
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::extract::normalize_content;
    use crate::app::{index, parser};

    #[test]
    fn rendered_bundle_parses_back() {
        let mut writer = BundleWriter::new();
        writer
            .add_file("src/lib.rs", "pub fn hi() {}\n")
            .add_file("empty.txt", "")
            .add_file("notes.md", "no newline");

        let text = writer.render();
        let sections = parser::parse_sections(&text).unwrap();
        let paths: Vec<_> = sections.iter().map(|s| s.path).collect();
        assert_eq!(paths, ["src/lib.rs", "empty.txt", "notes.md"]);

        for (section, original) in sections.iter().zip(["pub fn hi() {}\n", "", "no newline"]) {
            assert_eq!(normalize_content(section.content), normalize_content(original));
        }

        let entries = index::parse_index(&text).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].number, 3);
    }

    #[test]
    fn index_only_paths_are_listed_without_sections() {
        let mut writer = BundleWriter::new();
        writer.add_file("a.txt", "a\n").add_index_only("b.txt");

        let text = writer.render();
        assert!(text.contains("2. b.txt\n"));
        assert!(!text.contains("File: b.txt"));
    }
}
