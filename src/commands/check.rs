//! Single-file check: `relcheck path/to/file.rb`.

use crate::analysis;
use crate::core::{RelcheckError, ScanSummary};
use crate::io;
use crate::io::output::OutputFormat;
use anyhow::Result;
use std::path::PathBuf;

pub struct CheckConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

/// Check exactly one file. A missing path is the one fatal condition: it is
/// reported before the analysis core is ever invoked.
pub fn check_single_file(config: CheckConfig) -> Result<()> {
    if !io::file_exists(&config.path) {
        return Err(RelcheckError::PathNotFound(config.path).into());
    }

    let report = analysis::check_file(&config.path)?;
    let summary = ScanSummary::from_file_reports(1, vec![report]);

    let mut writer = super::open_writer(config.format, config.output.as_deref())?;
    writer.write_summary(&summary)
}
