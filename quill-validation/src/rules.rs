//! The fixed rule registry.
//!
//! Heading rules are anchored at line start and match any heading depth;
//! the acceptance-criteria rule is a plain substring scan; the length rule
//! counts Unicode scalar values.

use std::sync::LazyLock;

use regex::Regex;

use quill_core::constants::MIN_DOCUMENT_CHARS;
use quill_core::models::RuleOutcome;

/// A named, independent content check. Pure: same text, same outcome.
#[derive(Debug, Clone, Copy)]
pub struct ValidationRule {
    /// Stable lookup id, e.g. `has-introduction`.
    pub id: &'static str,
    /// Display name used in result line items.
    pub name: &'static str,
    pub description: &'static str,
    pub check: fn(&str) -> RuleOutcome,
}

static INTRODUCTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^#+\s*introduction").unwrap());

static TARGET_USERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^#+\s*(target\s*users|audience|users)").unwrap());

static FEATURES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^#+\s*(features|requirements)").unwrap());

static ACCEPTANCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)acceptance\s*criteria").unwrap());

static TIMELINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^#+\s*(timeline|schedule|delivery|roadmap)").unwrap());

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#\s+.+").unwrap());

fn check_introduction(content: &str) -> RuleOutcome {
    if INTRODUCTION_RE.is_match(content) {
        RuleOutcome::pass("Introduction section found")
    } else {
        RuleOutcome::fail("Missing introduction section")
    }
}

fn check_target_users(content: &str) -> RuleOutcome {
    if TARGET_USERS_RE.is_match(content) {
        RuleOutcome::pass("Target users section found")
    } else {
        RuleOutcome::fail("Missing target users or audience section")
    }
}

fn check_features(content: &str) -> RuleOutcome {
    if FEATURES_RE.is_match(content) {
        RuleOutcome::pass("Features or requirements section found")
    } else {
        RuleOutcome::fail("Missing features or requirements section")
    }
}

fn check_acceptance_criteria(content: &str) -> RuleOutcome {
    if ACCEPTANCE_RE.is_match(content) {
        RuleOutcome::pass("Acceptance criteria found")
    } else {
        RuleOutcome::fail("No acceptance criteria found in document")
    }
}

fn check_minimum_length(content: &str) -> RuleOutcome {
    let length = content.chars().count();
    let outcome = if length >= MIN_DOCUMENT_CHARS {
        RuleOutcome::pass("Document has sufficient length")
    } else {
        RuleOutcome::fail(format!(
            "Document is too short (less than {MIN_DOCUMENT_CHARS} characters)"
        ))
    };
    outcome.with_details(format!("Current length: {length} characters"))
}

fn check_timeline(content: &str) -> RuleOutcome {
    if TIMELINE_RE.is_match(content) {
        RuleOutcome::pass("Timeline section found")
    } else {
        RuleOutcome::fail("Missing timeline or delivery information")
    }
}

fn check_product_name(content: &str) -> RuleOutcome {
    if TITLE_RE.is_match(content) {
        RuleOutcome::pass("Product name found in title")
    } else {
        RuleOutcome::fail("Missing clear product name in document title")
    }
}

/// The seven rules, in canonical display order.
static REGISTRY: [ValidationRule; 7] = [
    ValidationRule {
        id: "has-introduction",
        name: "Has Introduction",
        description: "Document must have an introduction section",
        check: check_introduction,
    },
    ValidationRule {
        id: "has-target-users",
        name: "Has Target Users",
        description: "Document must define target users or audience",
        check: check_target_users,
    },
    ValidationRule {
        id: "has-features",
        name: "Has Features",
        description: "Document must describe features or requirements",
        check: check_features,
    },
    ValidationRule {
        id: "has-acceptance-criteria",
        name: "Has Acceptance Criteria",
        description: "Features should have acceptance criteria",
        check: check_acceptance_criteria,
    },
    ValidationRule {
        id: "minimum-length",
        name: "Minimum Length",
        description: "Document should have sufficient detail (at least 1000 characters)",
        check: check_minimum_length,
    },
    ValidationRule {
        id: "has-timeline",
        name: "Has Timeline",
        description: "Document should include timeline or delivery information",
        check: check_timeline,
    },
    ValidationRule {
        id: "has-product-name",
        name: "Has Product Name",
        description: "Document should clearly state the product name",
        check: check_product_name,
    },
];

/// The built-in rule set in canonical order.
pub fn registry() -> &'static [ValidationRule] {
    &REGISTRY
}
