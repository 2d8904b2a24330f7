//! Line-oriented extraction of relation declarations.
//!
//! This is deliberately not a Ruby parser. A declaration is any line that,
//! after optional leading whitespace, starts with a relation keyword followed
//! by a `:name` token. Comments, string literals, and conditionals are
//! invisible to this pass: an indented `belongs_to :user` inside a heredoc or
//! a disabled block matches exactly like a live declaration. Those false
//! positives are accepted behavior.

use crate::core::{Occurrence, OccurrenceGroup, RelationKind};
use once_cell::sync::Lazy;
use regex::Regex;

/// One compiled matcher per relation kind, in [`RelationKind::ALL`] order.
static RELATION_PATTERNS: Lazy<Vec<(RelationKind, Regex)>> = Lazy::new(|| {
    RelationKind::ALL
        .iter()
        .map(|&kind| {
            let pattern = format!(r"^\s*{}\s+:(\w+)", kind.keyword());
            let regex = Regex::new(&pattern).expect("relation keyword forms a valid pattern");
            (kind, regex)
        })
        .collect()
});

/// Match a single line against one kind's pattern, yielding the target name.
///
/// Anything after the target-name token (options, comments) is ignored.
fn match_relation(line: &str, pattern: &Regex) -> Option<String> {
    pattern
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str().to_string())
}

/// Run a single forward pass over the lines of one file, grouping every
/// matched declaration under its `(kind, target name)` identity.
///
/// Lines that match no kind are skipped; extraction never fails.
pub fn extract_relations<'a, I>(lines: I) -> OccurrenceGroup
where
    I: IntoIterator<Item = &'a str>,
{
    let mut group = OccurrenceGroup::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line_number = index + 1;

        // Every kind is tried on every line. Kinds cannot overlap today
        // (each keyword is distinct and anchored), but a future kind must
        // not be masked by an earlier match.
        for (kind, pattern) in RELATION_PATTERNS.iter() {
            if let Some(target_name) = match_relation(line, pattern) {
                group.push(Occurrence {
                    line_number,
                    raw_text: line.to_string(),
                    kind: *kind,
                    target_name,
                });
            }
        }
    }

    group
}
