//! Integration tests for rule selection, aggregation, and the documented
//! edge cases.

use proptest::prelude::*;

use quill_core::models::RuleOutcome;
use quill_validation::{ValidationEngine, ValidationRule};

const SHORT_DOC: &str = "# Acme\n## Introduction\nAcme is great.\n## Features\nDoes things.\n";

fn result_for<'a>(
    report: &'a quill_core::ValidationReport,
    rule_name: &str,
) -> &'a quill_core::RuleResult {
    report
        .results
        .iter()
        .find(|r| r.rule == rule_name)
        .unwrap_or_else(|| panic!("no result for rule {rule_name}"))
}

#[test]
fn short_document_scenario() {
    let engine = ValidationEngine::new();
    let report = engine.validate(SHORT_DOC, None);

    assert_eq!(report.summary.total, 7);

    assert!(result_for(&report, "Has Introduction").passed);
    assert!(result_for(&report, "Has Features").passed);
    assert!(result_for(&report, "Has Product Name").passed);
    assert!(!result_for(&report, "Has Timeline").passed);
    assert!(!result_for(&report, "Has Acceptance Criteria").passed);

    let min_length = result_for(&report, "Minimum Length");
    assert!(!min_length.passed);
    let expected_count = SHORT_DOC.chars().count();
    assert_eq!(
        min_length.details.as_deref(),
        Some(format!("Current length: {expected_count} characters").as_str())
    );
}

#[test]
fn summary_counts_are_consistent() {
    let engine = ValidationEngine::new();
    let report = engine.validate(SHORT_DOC, None);

    let passed = report.results.iter().filter(|r| r.passed).count();
    assert_eq!(report.summary.passed, passed);
    assert_eq!(report.summary.failed, report.summary.total - passed);
    assert_eq!(
        report.summary.score,
        (100.0 * passed as f64 / report.summary.total as f64).round() as u32
    );
}

#[test]
fn validation_is_idempotent() {
    let engine = ValidationEngine::new();
    let first = engine.validate(SHORT_DOC, None);
    let second = engine.validate(SHORT_DOC, None);
    assert_eq!(first, second);
}

#[test]
fn empty_filter_runs_all_rules() {
    let engine = ValidationEngine::new();
    let all = engine.validate(SHORT_DOC, None);
    let empty = engine.validate(SHORT_DOC, Some(&[]));
    assert_eq!(all, empty);
    assert_eq!(all.summary.total, 7);
}

#[test]
fn filter_selects_exactly_the_named_rules() {
    let engine = ValidationEngine::new();
    let ids = vec!["minimum-length".to_string(), "has-introduction".to_string()];
    let report = engine.validate(SHORT_DOC, Some(&ids));

    assert_eq!(report.summary.total, 2);
    // Registry order, not caller order.
    assert_eq!(report.results[0].rule, "Has Introduction");
    assert_eq!(report.results[1].rule, "Minimum Length");
}

#[test]
fn unknown_rule_ids_are_silently_dropped() {
    let engine = ValidationEngine::new();
    let ids = vec!["has-introduction".to_string(), "no-such-rule".to_string()];
    let report = engine.validate(SHORT_DOC, Some(&ids));

    assert_eq!(report.summary.total, 1);
    assert_eq!(report.results[0].rule, "Has Introduction");
}

#[test]
fn filter_matching_nothing_yields_zero_score() {
    let engine = ValidationEngine::new();
    let ids = vec!["bogus-a".to_string(), "bogus-b".to_string()];
    let report = engine.validate(SHORT_DOC, Some(&ids));

    assert!(report.results.is_empty());
    assert_eq!(report.summary.total, 0);
    assert_eq!(report.summary.passed, 0);
    assert_eq!(report.summary.failed, 0);
    assert_eq!(report.summary.score, 0);
}

#[test]
fn long_complete_document_scores_hundred() {
    let filler = "More detail about the product and its behavior. ".repeat(30);
    let doc = format!(
        "# Acme\n\n## Introduction\n{filler}\n\n## Target Users\nSMBs.\n\n\
         ## Features\n- Fast\n\n## Acceptance Criteria\nListed per feature.\n\n\
         ## Timeline\nQ3.\n"
    );

    let engine = ValidationEngine::new();
    let report = engine.validate(&doc, None);
    assert_eq!(report.summary.score, 100, "failing: {:?}", report.results);
}

#[test]
fn list_rules_exposes_stable_ids_in_order() {
    let engine = ValidationEngine::new();
    let ids: Vec<String> = engine.list_rules().into_iter().map(|r| r.id).collect();
    assert_eq!(
        ids,
        vec![
            "has-introduction",
            "has-target-users",
            "has-features",
            "has-acceptance-criteria",
            "minimum-length",
            "has-timeline",
            "has-product-name",
        ]
    );
}

#[test]
fn custom_rules_substitute_the_registry() {
    fn always_fails(_: &str) -> RuleOutcome {
        RuleOutcome::fail("nope")
    }

    let engine = ValidationEngine::with_rules(vec![ValidationRule {
        id: "always-fails",
        name: "Always Fails",
        description: "test double",
        check: always_fails,
    }]);

    let report = engine.validate("anything", None);
    assert_eq!(report.summary.total, 1);
    assert_eq!(report.summary.score, 0);
    assert_eq!(report.results[0].rule, "Always Fails");
}

proptest! {
    /// Score stays within 0..=100 for arbitrary text and arbitrary filters.
    #[test]
    fn prop_score_bounds(
        text in "[ -~\\n]{0,400}",
        ids in proptest::collection::vec("[a-z-]{1,25}", 0..8),
    ) {
        let engine = ValidationEngine::new();
        let report = engine.validate(&text, Some(&ids));
        prop_assert!(report.summary.score <= 100);
        prop_assert_eq!(
            report.summary.failed,
            report.summary.total - report.summary.passed
        );
    }
}
