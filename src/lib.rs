// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    DuplicateReport, FileReport, Occurrence, OccurrenceGroup, RelationIdentity, RelationKind,
    RelcheckError, RelcheckResult, ScanSummary,
};

pub use crate::analysis::{analyze_lines, check_file, extract_relations, find_duplicates};

pub use crate::io::walker::{looks_like_model_file, ModelFileWalker};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
