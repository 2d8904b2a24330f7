pub mod check;
pub mod scan;

use crate::io::output::{create_writer, OutputFormat, OutputWriter};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::stdout;
use std::path::Path;

/// Open the report destination: a file when `--output` is given, stdout
/// otherwise.
fn open_writer(format: OutputFormat, output: Option<&Path>) -> Result<Box<dyn OutputWriter>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file '{}'", path.display()))?;
            Ok(create_writer(format, file))
        }
        None => Ok(create_writer(format, stdout())),
    }
}
