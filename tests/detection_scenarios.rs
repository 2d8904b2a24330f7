//! End-to-end scenarios for the extraction + detection pipeline.

use indoc::indoc;
use pretty_assertions::assert_eq;
use relcheck::{analyze_lines, extract_relations, find_duplicates, RelationKind};

#[test]
fn mixed_file_flags_only_the_repeated_identity() {
    let reports = analyze_lines([
        "  belongs_to :user",
        "has_many :posts",
        "belongs_to :user  # legacy",
    ]);

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].identity.kind, RelationKind::BelongsTo);
    assert_eq!(reports[0].identity.target_name, "user");

    let lines: Vec<usize> = reports[0].occurrences.iter().map(|o| o.line_number).collect();
    assert_eq!(lines, vec![1, 3]);
}

#[test]
fn triple_declaration_yields_one_report_with_three_occurrences() {
    let reports = analyze_lines([
        "has_many :comments",
        "has_many :comments",
        "has_many :comments",
    ]);

    assert_eq!(reports.len(), 1);
    let lines: Vec<usize> = reports[0].occurrences.iter().map(|o| o.line_number).collect();
    assert_eq!(lines, vec![1, 2, 3]);
}

#[test]
fn empty_input_yields_no_reports() {
    assert!(analyze_lines([]).is_empty());
}

#[test]
fn file_without_relation_patterns_yields_no_reports() {
    let source = indoc! {"
        class User < ApplicationRecord
          validates :email, presence: true

          def full_name
            [first_name, last_name].join(' ')
          end
        end
    "};
    assert!(analyze_lines(source.lines()).is_empty());
}

#[test]
fn same_name_across_kinds_is_not_a_duplicate() {
    let source = indoc! {"
        class Book < ApplicationRecord
          belongs_to :author
          has_many :author
        end
    "};
    assert!(analyze_lines(source.lines()).is_empty());
}

#[test]
fn realistic_model_reports_in_first_seen_order() {
    let source = indoc! {"
        class Order < ApplicationRecord
          belongs_to :customer
          has_many :line_items, dependent: :destroy
          has_one :invoice
          has_and_belongs_to_many :promotions

          # pasted from another branch
          has_many :line_items
          belongs_to :customer, optional: true
        end
    "};

    let reports = analyze_lines(source.lines());
    let identities: Vec<String> = reports.iter().map(|r| r.identity.to_string()).collect();
    assert_eq!(
        identities,
        vec!["belongs_to :customer", "has_many :line_items"]
    );

    for report in &reports {
        let lines: Vec<usize> = report.occurrences.iter().map(|o| o.line_number).collect();
        let mut sorted = lines.clone();
        sorted.sort_unstable();
        assert_eq!(lines, sorted, "occurrences must stay in line order");
    }
}

#[test]
fn occurrence_text_is_trimmed_only_at_report_time() {
    let group = extract_relations(["    has_one :profile, required: true   "]);
    let reports = find_duplicates(&group);
    assert!(reports.is_empty());

    let (_, occurrences) = group.iter().next().unwrap();
    assert_eq!(occurrences[0].raw_text, "    has_one :profile, required: true   ");
    assert_eq!(
        occurrences[0].trimmed_text(),
        "has_one :profile, required: true"
    );
}
