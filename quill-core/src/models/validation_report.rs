use serde::{Deserialize, Serialize};

/// What a single rule check produced: pass/fail plus a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub passed: bool,
    pub message: String,
    /// Extra context, e.g. the measured character count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl RuleOutcome {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
            details: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// A rule outcome paired with the rule's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    /// Display name of the rule that produced this line item.
    pub rule: String,
    pub passed: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Aggregate counts over the rules that ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// `round(100 * passed / total)`, clamped to 0 when no rules ran.
    pub score: u32,
}

impl ValidationSummary {
    /// Build a summary from counts. An empty run (`total == 0`) is defined
    /// as `score = 0`, `failed = 0` rather than a division by zero.
    pub fn from_counts(total: usize, passed: usize) -> Self {
        let score = if total == 0 {
            0
        } else {
            (100.0 * passed as f64 / total as f64).round() as u32
        };
        Self {
            total,
            passed,
            failed: total - passed,
            score,
        }
    }
}

/// Full validation output: one result per rule run, plus the summary.
/// A pure projection of the input text — nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub results: Vec<RuleResult>,
    pub summary: ValidationSummary,
}

/// Listing projection of a validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_score_rounds() {
        let s = ValidationSummary::from_counts(7, 5);
        assert_eq!(s.score, 71);
        assert_eq!(s.failed, 2);
    }

    #[test]
    fn summary_empty_run_is_zero() {
        let s = ValidationSummary::from_counts(0, 0);
        assert_eq!(s.score, 0);
        assert_eq!(s.failed, 0);
        assert_eq!(s.total, 0);
    }

    #[test]
    fn summary_all_passed_is_hundred() {
        let s = ValidationSummary::from_counts(3, 3);
        assert_eq!(s.score, 100);
    }
}
