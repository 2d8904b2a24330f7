//! Duplicate detection over an extracted [`OccurrenceGroup`].

use crate::core::{DuplicateReport, OccurrenceGroup};

/// Emit one report per identity declared more than once, in the order the
/// identities were first seen. Entries with a single occurrence are skipped.
///
/// Read-only over its input; an empty result is the normal "all clean" case.
pub fn find_duplicates(group: &OccurrenceGroup) -> Vec<DuplicateReport> {
    group
        .iter()
        .filter(|(_, occurrences)| occurrences.len() > 1)
        .map(|(identity, occurrences)| DuplicateReport {
            identity: identity.clone(),
            occurrences: occurrences.to_vec(),
        })
        .collect()
}
