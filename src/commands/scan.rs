//! Whole-tree scan: `relcheck` with no path argument.

use crate::analysis;
use crate::config::load_config;
use crate::core::{FileReport, ScanSummary};
use crate::io::output::OutputFormat;
use crate::io::walker::ModelFileWalker;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::PathBuf;

pub struct ScanConfig {
    pub root: PathBuf,
    pub config_file: Option<PathBuf>,
    /// Overrides the configured search paths when non-empty.
    pub search_paths: Vec<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub parallel: bool,
    pub jobs: usize,
}

/// Discover model files under the root and run the per-file pipeline over
/// each. Finding duplicates is a reporting outcome, not an error.
pub fn scan_tree(config: ScanConfig) -> Result<()> {
    let file_config = load_config(&config.root, config.config_file.as_deref())?;
    let search_paths = if config.search_paths.is_empty() {
        file_config.search.paths
    } else {
        config.search_paths
    };

    let files = ModelFileWalker::new(config.root.clone())
        .with_search_paths(search_paths)
        .with_extension(file_config.search.extension)
        .with_ignore_patterns(file_config.search.ignore)
        .walk()?;
    log::info!("found {} candidate model file(s)", files.len());

    // Each file's pass is pure and independent, so the scan is a plain
    // parallel map with results collected for sequential reporting.
    let reports = if config.parallel {
        analyze_files_parallel(&files, config.jobs)?
    } else {
        files
            .iter()
            .map(|path| analysis::check_file(path))
            .collect::<Result<Vec<_>>>()?
    };

    let summary = ScanSummary::from_file_reports(files.len(), reports);
    let mut writer = super::open_writer(config.format, config.output.as_deref())?;
    writer.write_summary(&summary)
}

fn analyze_files_parallel(files: &[PathBuf], jobs: usize) -> Result<Vec<FileReport>> {
    // num_threads(0) lets rayon size the pool to the machine.
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .context("failed to build scan worker pool")?;
    pool.install(|| {
        files
            .par_iter()
            .map(|path| analysis::check_file(path))
            .collect()
    })
}
