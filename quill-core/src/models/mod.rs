//! Domain models shared across the workspace.

pub mod template;
pub mod validation_report;

pub use template::{Template, TemplateDraft, TemplateSummary, TemplateVersion};
pub use validation_report::{
    RuleInfo, RuleOutcome, RuleResult, ValidationReport, ValidationSummary,
};
