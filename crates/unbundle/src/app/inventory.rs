//! Cross-checking the bundle index against the headers actually present.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::app::{index, parser};
use crate::domain::errors::BundleError;

/// Counts and gaps found by comparing index entries with file headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryReport {
    pub index_entries: usize,
    pub headers: usize,
    /// Indexed paths with no header, sorted and deduplicated.
    pub missing: Vec<String>,
}

impl InventoryReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Human-readable report, one finding per line.
    pub fn render(&self) -> String {
        let mut lines = vec![
            format!("Index entries: {}", self.index_entries),
            format!("Headers found: {}", self.headers),
        ];

        if self.missing.is_empty() {
            lines.push("All indexed files have headers. Nothing appears to be missing.".into());
        } else {
            lines.push(format!("Missing headers for {} paths:", self.missing.len()));
            lines.extend(self.missing.iter().map(|path| format!(" - {path}")));
        }

        lines.join("\n")
    }
}

/// Compare the index section of `text` with every header in it.
///
/// Missing entries are a normal outcome; only structural problems (no
/// `INDEX:` marker, no headers) are errors.
pub fn check(text: &str) -> Result<InventoryReport, BundleError> {
    let entries = index::parse_index(text)?;
    let headers = parser::parse_headers(text)?;

    let present: BTreeSet<&str> = headers.iter().map(|h| h.path.as_str()).collect();
    let missing: BTreeSet<&str> = entries
        .iter()
        .map(|entry| entry.path.as_str())
        .filter(|path| !present.contains(path))
        .collect();

    if !missing.is_empty() {
        tracing::info!(count = missing.len(), "indexed paths without headers");
    }

    Ok(InventoryReport {
        index_entries: entries.len(),
        headers: headers.len(),
        missing: missing.into_iter().map(str::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(path: &str) -> String {
        format!("==========\nFile: {path}\n==========\n")
    }

    #[test]
    fn reports_the_set_difference() {
        let text = format!(
            "INDEX:\n1. A\n2. B\n3. C\n{}a\n{}c\n",
            header("A"),
            header("C")
        );
        let report = check(&text).unwrap();
        assert_eq!(report.index_entries, 3);
        assert_eq!(report.headers, 2);
        assert_eq!(report.missing, ["B"]);
    }

    #[test]
    fn missing_paths_are_sorted_and_unique() {
        let text = format!(
            "INDEX:\n1. zeta.rs\n2. alpha.rs\n3. zeta.rs\n4. kept.rs\n{}x\n",
            header("kept.rs")
        );
        let report = check(&text).unwrap();
        assert_eq!(report.index_entries, 4);
        assert_eq!(report.missing, ["alpha.rs", "zeta.rs"]);
        assert!(!report.is_complete());
    }

    #[test]
    fn headers_outside_the_index_are_not_missing() {
        let text = format!("INDEX:\n1. a\n{}a\n{}extra\n", header("a"), header("b"));
        let report = check(&text).unwrap();
        assert!(report.is_complete());
        assert_eq!(report.headers, 2);
    }

    #[test]
    fn structural_problems_are_errors() {
        let no_marker = format!("{}a\n", header("a"));
        assert!(matches!(check(&no_marker), Err(BundleError::IndexMarkerMissing)));
        assert!(matches!(check("INDEX:\n1. a\n"), Err(BundleError::NoHeaders)));
    }

    #[test]
    fn renders_complete_report() {
        let report = InventoryReport {
            index_entries: 1,
            headers: 1,
            missing: Vec::new(),
        };
        assert_eq!(
            report.render(),
            "Index entries: 1\nHeaders found: 1\nAll indexed files have headers. Nothing appears to be missing."
        );
    }
}
