//! Materializing bundle sections onto disk.

use std::path::{Path, PathBuf};

use crate::app::parser;
use crate::domain::errors::BundleError;
use crate::infra::config::Config;
use crate::infra::fs;

/// Runtime options controlling extraction behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Record per-file failures and continue instead of aborting.
    pub keep_going: bool,
    /// Report what would be written without touching the filesystem.
    pub dry_run: bool,
}

impl ExtractOptions {
    /// Build options from configuration defaults.
    pub fn from_config(config: &Config) -> Self {
        Self {
            keep_going: config.extract.keep_going,
            dry_run: false,
        }
    }
}

/// A file written (or, in dry-run mode, planned) by the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    pub path: String,
    pub target: PathBuf,
    pub bytes: usize,
}

/// A section that could not be written while `keep_going` was set.
#[derive(Debug)]
pub struct ExtractFailure {
    pub path: String,
    pub error: BundleError,
}

/// Outcome of one extraction run.
#[derive(Debug, Default)]
pub struct ExtractReport {
    pub files: Vec<ExtractedFile>,
    pub failures: Vec<ExtractFailure>,
}

impl ExtractReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Collapse trailing newline noise to exactly one `\n`; empty stays empty.
pub fn normalize_content(raw: &str) -> String {
    let trimmed = raw.trim_end_matches(['\r', '\n']);
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}\n")
    }
}

/// Writes each section of a bundle to its declared path beneath `root`.
#[derive(Debug, Clone)]
pub struct Extractor {
    root: PathBuf,
    options: ExtractOptions,
}

impl Extractor {
    pub fn new(root: impl Into<PathBuf>, options: ExtractOptions) -> Self {
        Self {
            root: root.into(),
            options,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Extract every section in bundle order, calling `on_file` after each one
    /// is written.
    ///
    /// A bundle without headers fails before anything is written. Without
    /// `keep_going`, the first write failure is returned and later sections are
    /// skipped.
    pub fn extract<F>(&self, text: &str, mut on_file: F) -> Result<ExtractReport, BundleError>
    where
        F: FnMut(&ExtractedFile),
    {
        let sections = parser::parse_sections(text)?;
        tracing::info!(
            count = sections.len(),
            root = %self.root.display(),
            "found files in bundle"
        );

        let mut report = ExtractReport::default();
        for section in sections {
            match self.write_section(section.path, section.content) {
                Ok(file) => {
                    on_file(&file);
                    report.files.push(file);
                }
                Err(error) if self.options.keep_going => {
                    tracing::warn!(path = section.path, error = %error, "skipping file");
                    report.failures.push(ExtractFailure {
                        path: section.path.to_string(),
                        error,
                    });
                }
                Err(error) => return Err(error),
            }
        }

        Ok(report)
    }

    fn write_section(&self, declared: &str, raw: &str) -> Result<ExtractedFile, BundleError> {
        let target = fs::resolve_target(&self.root, declared)?;
        let contents = normalize_content(raw);

        if self.options.dry_run {
            tracing::debug!(path = declared, "dry run, not writing");
        } else {
            fs::write_file(&target, &contents)?;
        }

        Ok(ExtractedFile {
            path: declared.to_string(),
            target,
            bytes: contents.len(),
        })
    }
}
