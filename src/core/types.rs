//! Common type definitions used across the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The closed set of association shapes the checker recognizes.
///
/// Extending this set is a code change: a new variant here, a keyword below,
/// and a pattern entry in `analysis::extract`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    BelongsTo,
    HasOne,
    HasMany,
    HasAndBelongsToMany,
}

impl RelationKind {
    /// All kinds, in the order declarations are matched against.
    pub const ALL: [RelationKind; 4] = [
        RelationKind::BelongsTo,
        RelationKind::HasOne,
        RelationKind::HasMany,
        RelationKind::HasAndBelongsToMany,
    ];

    /// The source-level keyword that opens a declaration of this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            RelationKind::BelongsTo => "belongs_to",
            RelationKind::HasOne => "has_one",
            RelationKind::HasMany => "has_many",
            RelationKind::HasAndBelongsToMany => "has_and_belongs_to_many",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One matched declaration at a specific line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// 1-based position in the source file.
    pub line_number: usize,
    /// The original line, untrimmed. Trimming happens at report time.
    pub raw_text: String,
    pub kind: RelationKind,
    pub target_name: String,
}

impl Occurrence {
    /// The line as it should appear in a report.
    pub fn trimmed_text(&self) -> &str {
        self.raw_text.trim()
    }
}

/// The deduplication key: two occurrences declare the same relation
/// iff their identities are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationIdentity {
    pub kind: RelationKind,
    pub target_name: String,
}

impl fmt::Display for RelationIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :{}", self.kind, self.target_name)
    }
}

/// One identity declared more than once, with every occurrence in line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateReport {
    pub identity: RelationIdentity,
    pub occurrences: Vec<Occurrence>,
}

/// All duplicate reports for a single scanned file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub duplicates: Vec<DuplicateReport>,
}

impl FileReport {
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }
}

/// Aggregated result of a scan across one or more files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSummary {
    pub files_scanned: usize,
    /// Only files that actually contain duplicates.
    pub files: Vec<FileReport>,
    pub total_duplicates: usize,
}

impl ScanSummary {
    pub fn from_file_reports(files_scanned: usize, reports: Vec<FileReport>) -> Self {
        let files: Vec<FileReport> = reports
            .into_iter()
            .filter(FileReport::has_duplicates)
            .collect();
        let total_duplicates = files.iter().map(|f| f.duplicates.len()).sum();
        Self {
            files_scanned,
            files,
            total_duplicates,
        }
    }

    pub fn has_duplicates(&self) -> bool {
        self.total_duplicates > 0
    }
}

/// Error types for the application boundary. The analysis core itself
/// has no failure mode.
#[derive(Debug, thiserror::Error)]
pub enum RelcheckError {
    #[error("file '{}' not found", .0.display())]
    PathNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias
pub type RelcheckResult<T> = Result<T, RelcheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_round_trips_through_display() {
        for kind in RelationKind::ALL {
            assert_eq!(kind.to_string(), kind.keyword());
        }
    }

    #[test]
    fn identity_display_matches_declaration_syntax() {
        let identity = RelationIdentity {
            kind: RelationKind::HasMany,
            target_name: "posts".to_string(),
        };
        assert_eq!(identity.to_string(), "has_many :posts");
    }

    #[test]
    fn trimmed_text_strips_surrounding_whitespace_only() {
        let occurrence = Occurrence {
            line_number: 3,
            raw_text: "  belongs_to :user  # legacy".to_string(),
            kind: RelationKind::BelongsTo,
            target_name: "user".to_string(),
        };
        assert_eq!(occurrence.trimmed_text(), "belongs_to :user  # legacy");
    }

    #[test]
    fn summary_drops_clean_files_and_counts_reports() {
        let clean = FileReport {
            path: PathBuf::from("app/models/post.rb"),
            duplicates: vec![],
        };
        let dirty = FileReport {
            path: PathBuf::from("app/models/user.rb"),
            duplicates: vec![DuplicateReport {
                identity: RelationIdentity {
                    kind: RelationKind::BelongsTo,
                    target_name: "account".to_string(),
                },
                occurrences: vec![],
            }],
        };

        let summary = ScanSummary::from_file_reports(2, vec![clean, dirty]);
        assert_eq!(summary.files_scanned, 2);
        assert_eq!(summary.files.len(), 1);
        assert_eq!(summary.total_duplicates, 1);
        assert!(summary.has_duplicates());
    }
}
