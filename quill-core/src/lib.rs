//! # quill-core
//!
//! Foundation crate for the quill document service.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::QuillConfig;
pub use errors::{QuillError, QuillResult};
pub use models::{
    RuleInfo, RuleOutcome, RuleResult, Template, TemplateDraft, TemplateSummary, TemplateVersion,
    ValidationReport, ValidationSummary,
};
pub use traits::ITemplateStorage;
