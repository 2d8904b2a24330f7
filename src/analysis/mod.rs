//! The analysis core: extraction and duplicate detection.
//!
//! Both stages are pure and synchronous. Each file's pass is an independent
//! computation with no shared state, so callers are free to map it over many
//! files in parallel; the boundary I/O (reading the file) lives in
//! [`check_file`] and nowhere deeper.

pub mod detect;
pub mod extract;

pub use detect::find_duplicates;
pub use extract::extract_relations;

use crate::core::{DuplicateReport, FileReport};
use crate::io;
use anyhow::{Context, Result};
use std::path::Path;

/// Run the full extraction-then-detection pipeline over one file's lines.
pub fn analyze_lines<'a, I>(lines: I) -> Vec<DuplicateReport>
where
    I: IntoIterator<Item = &'a str>,
{
    find_duplicates(&extract_relations(lines))
}

/// Read a file and analyze it. The read is the only fallible step.
pub fn check_file(path: &Path) -> Result<FileReport> {
    let content = io::read_file(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    let duplicates = analyze_lines(content.lines());
    log::debug!(
        "{}: {} duplicate relation(s)",
        path.display(),
        duplicates.len()
    );
    Ok(FileReport {
        path: path.to_path_buf(),
        duplicates,
    })
}
