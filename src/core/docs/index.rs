//! Navigation index (`SUMMARY.md`): a flat, ordered list of page links.
//!
//! Incremental runs append; `--all` rewrites. Both produce the same bytes for
//! the same sequence of pages, because a fresh index is always
//! `HEADER` followed by one line per page.

use std::path::Path;

use regex::Regex;

use crate::error::{Error, Result};
use crate::utils::io;

pub const HEADER: &str = "# Summary\n\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub title: String,
    /// Page path relative to the docs directory.
    pub path: String,
}

impl IndexEntry {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }

    fn line(&self) -> String {
        format!("- [{}]({})\n", self.title, self.path)
    }
}

pub fn render(entries: &[IndexEntry]) -> String {
    let mut out = HEADER.to_string();
    for entry in entries {
        out.push_str(&entry.line());
    }
    out
}

/// Page paths linked from an index, in file order.
///
/// Only the link target is captured, so titles may contain brackets.
pub fn parse_paths(content: &str) -> Result<Vec<String>> {
    let re = Regex::new(r"^\s*[-*]\s+\[.*\]\(([^)]+)\)\s*$")
        .map_err(|e| Error::internal_unexpected(e.to_string()))?;

    Ok(content
        .lines()
        .filter_map(|line| re.captures(line))
        .map(|caps| caps[1].to_string())
        .collect())
}

/// Add `entry` unless its path is already listed. Returns whether the file changed.
pub fn append(index_path: &Path, entry: &IndexEntry) -> Result<bool> {
    if !index_path.exists() {
        io::write_file_atomic(
            index_path,
            &render(std::slice::from_ref(entry)),
            "write navigation index",
        )?;
        return Ok(true);
    }

    let mut content = io::read_file(index_path, "read navigation index")?;
    if parse_paths(&content)?.iter().any(|p| *p == entry.path) {
        return Ok(false);
    }

    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(&entry.line());
    io::write_file_atomic(index_path, &content, "write navigation index")?;
    Ok(true)
}

/// Replace the whole index with `entries`.
pub fn rewrite(index_path: &Path, entries: &[IndexEntry]) -> Result<()> {
    io::write_file_atomic(index_path, &render(entries), "write navigation index")
}
