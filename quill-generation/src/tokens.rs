//! Placeholder tokens replaced during generation.
//!
//! Literal double-brace markers: global replace, case-sensitive, no
//! escaping mechanism.

pub const PRODUCT_NAME: &str = "{{PRODUCT_NAME}}";
pub const PRODUCT_DESCRIPTION: &str = "{{PRODUCT_DESCRIPTION}}";
pub const TARGET_AUDIENCE: &str = "{{TARGET_AUDIENCE}}";
pub const CORE_FEATURES: &str = "{{CORE_FEATURES}}";
pub const CONSTRAINTS: &str = "{{CONSTRAINTS}}";
pub const DATE: &str = "{{DATE}}";

/// All six tokens, for callers that need to scan output.
pub const ALL: [&str; 6] = [
    PRODUCT_NAME,
    PRODUCT_DESCRIPTION,
    TARGET_AUDIENCE,
    CORE_FEATURES,
    CONSTRAINTS,
    DATE,
];

/// Rendered in place of `{{CONSTRAINTS}}` when the caller supplies none.
pub const NO_CONSTRAINTS_TEXT: &str = "No specific constraints identified.";

/// One `- item` bullet line per entry, joined by newlines.
pub fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
