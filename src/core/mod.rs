pub mod types;

pub use types::{
    DuplicateReport, FileReport, Occurrence, RelationIdentity, RelationKind, RelcheckError,
    RelcheckResult, ScanSummary,
};

use std::collections::HashMap;

/// Insertion-ordered multimap from [`RelationIdentity`] to its occurrences.
///
/// The key order is the order identities are first seen in the file, which is
/// what makes report ordering deterministic and reproducible. Built fresh per
/// file and discarded after detection runs.
#[derive(Debug, Default, Clone)]
pub struct OccurrenceGroup {
    order: Vec<RelationIdentity>,
    entries: HashMap<RelationIdentity, Vec<Occurrence>>,
}

impl OccurrenceGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an occurrence to its identity's list, registering the identity
    /// on first sight.
    pub fn push(&mut self, occurrence: Occurrence) {
        let identity = RelationIdentity {
            kind: occurrence.kind,
            target_name: occurrence.target_name.clone(),
        };
        match self.entries.get_mut(&identity) {
            Some(list) => list.push(occurrence),
            None => {
                self.order.push(identity.clone());
                self.entries.insert(identity, vec![occurrence]);
            }
        }
    }

    pub fn get(&self, identity: &RelationIdentity) -> Option<&[Occurrence]> {
        self.entries.get(identity).map(Vec::as_slice)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&RelationIdentity, &[Occurrence])> {
        self.order.iter().map(|identity| {
            let occurrences = self.entries[identity].as_slice();
            (identity, occurrences)
        })
    }

    /// Number of distinct identities.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
