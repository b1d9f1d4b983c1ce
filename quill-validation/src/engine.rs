//! ValidationEngine — selects rules, runs each against the document text,
//! aggregates the pass/fail summary.

use quill_core::models::{RuleInfo, RuleResult, ValidationReport, ValidationSummary};

use crate::rules::{self, ValidationRule};

/// Runs a selected subset (or all) of the rule registry over a document.
pub struct ValidationEngine {
    rules: Vec<ValidationRule>,
}

impl ValidationEngine {
    /// Engine over the built-in rule registry.
    pub fn new() -> Self {
        Self {
            rules: rules::registry().to_vec(),
        }
    }

    /// Engine over a custom rule set. Tests substitute rules here without
    /// touching any global state.
    pub fn with_rules(rules: Vec<ValidationRule>) -> Self {
        Self { rules }
    }

    /// Run the selected rules over the text.
    ///
    /// An omitted or empty filter runs all rules; otherwise exactly the
    /// rules whose id appears in the filter run, in registry order — never
    /// caller order. Unknown ids are silently dropped, so a filter that
    /// matches nothing yields an empty report with score 0.
    pub fn validate(&self, content: &str, rule_ids: Option<&[String]>) -> ValidationReport {
        let selected = self.select(rule_ids);
        tracing::debug!(rules = selected.len(), "validating document");

        let results: Vec<RuleResult> = selected
            .iter()
            .map(|rule| {
                let outcome = (rule.check)(content);
                RuleResult {
                    rule: rule.name.to_string(),
                    passed: outcome.passed,
                    message: outcome.message,
                    details: outcome.details,
                }
            })
            .collect();

        let passed = results.iter().filter(|r| r.passed).count();
        let summary = ValidationSummary::from_counts(results.len(), passed);

        tracing::info!(
            passed = summary.passed,
            total = summary.total,
            score = summary.score,
            "validation complete"
        );

        ValidationReport { results, summary }
    }

    /// Listing projection of every rule in the engine.
    pub fn list_rules(&self) -> Vec<RuleInfo> {
        self.rules
            .iter()
            .map(|rule| RuleInfo {
                id: rule.id.to_string(),
                name: rule.name.to_string(),
                description: rule.description.to_string(),
            })
            .collect()
    }

    fn select(&self, rule_ids: Option<&[String]>) -> Vec<&ValidationRule> {
        match rule_ids {
            None => self.rules.iter().collect(),
            Some(ids) if ids.is_empty() => self.rules.iter().collect(),
            Some(ids) => self
                .rules
                .iter()
                .filter(|rule| ids.iter().any(|id| id == rule.id))
                .collect(),
        }
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}
