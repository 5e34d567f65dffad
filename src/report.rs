//! Scaffold result reporting: what was created, what was rewritten, and
//! which per-file errors occurred. Pure inspection and formatting; the
//! caller decides how to present it and whether partial failure is fatal.

use crate::error::FileError;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Outcome of one instancing run. Immutable after construction.
///
/// File sets are keyed by path relative to the target directory and iterate
/// in lexicographic order.
#[derive(Debug)]
pub struct ScaffoldResult {
    created_files: BTreeSet<PathBuf>,
    substituted_files: BTreeSet<PathBuf>,
    errors: Vec<FileError>,
}

impl ScaffoldResult {
    pub fn new(
        created_files: BTreeSet<PathBuf>,
        substituted_files: BTreeSet<PathBuf>,
        errors: Vec<FileError>,
    ) -> Self {
        Self { created_files, substituted_files, errors }
    }

    /// Relative paths of every file copied from the template.
    pub fn created_files(&self) -> &BTreeSet<PathBuf> {
        &self.created_files
    }

    /// Relative paths of every file rewritten by a substitution rule.
    pub fn substituted_files(&self) -> &BTreeSet<PathBuf> {
        &self.substituted_files
    }

    /// Per-file errors in accumulation order: copy-pass errors first, in
    /// traversal order, then rule errors in declaration order.
    pub fn errors(&self) -> &[FileError] {
        &self.errors
    }

    /// True iff no per-file error occurred.
    pub fn is_full_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Human-readable summary for the caller to print.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        lines.push(format!(
            "{} file(s) created, {} file(s) substituted.",
            self.created_files.len(),
            self.substituted_files.len()
        ));
        for path in &self.created_files {
            let marker = if self.substituted_files.contains(path) {
                "substituted"
            } else {
                "created"
            };
            lines.push(format!("  {}: '{}'", marker, path.display()));
        }

        if !self.errors.is_empty() {
            lines.push(format!("{} error(s):", self.errors.len()));
            for error in &self.errors {
                lines.push(format!("  {}", error));
            }
        }

        lines
    }
}
