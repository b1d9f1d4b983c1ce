//! DocumentGenerator — resolves a template through the cache→store path
//! and substitutes the placeholder tokens.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use quill_core::constants::DEFAULT_TEMPLATE_NAME;
use quill_core::errors::{QuillError, QuillResult};
use quill_storage::CachedTemplates;

use crate::tokens;

/// Arguments for one generation request (camelCase on the wire).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub product_name: String,
    pub product_description: String,
    pub target_audience: String,
    pub core_features: Vec<String>,
    #[serde(default)]
    pub constraints: Option<Vec<String>>,
    #[serde(default)]
    pub template_name: Option<String>,
}

impl GenerateRequest {
    /// Reject requests with missing or empty required fields.
    pub fn validate(&self) -> QuillResult<()> {
        if self.product_name.trim().is_empty() {
            return Err(QuillError::invalid_input("productName", "is required"));
        }
        if self.product_description.trim().is_empty() {
            return Err(QuillError::invalid_input(
                "productDescription",
                "is required",
            ));
        }
        if self.target_audience.trim().is_empty() {
            return Err(QuillError::invalid_input("targetAudience", "is required"));
        }
        if self.core_features.is_empty() {
            return Err(QuillError::invalid_input(
                "coreFeatures",
                "at least one core feature is required",
            ));
        }
        Ok(())
    }
}

/// The document generation engine.
pub struct DocumentGenerator {
    templates: CachedTemplates,
    default_template: String,
}

impl DocumentGenerator {
    pub fn new(templates: CachedTemplates) -> Self {
        Self {
            templates,
            default_template: DEFAULT_TEMPLATE_NAME.to_string(),
        }
    }

    /// Override the template used when a request names none.
    pub fn with_default_template(mut self, name: impl Into<String>) -> Self {
        self.default_template = name.into();
        self
    }

    /// Generate a document for the request.
    ///
    /// A missing template propagates as the store's not-found error; there
    /// are no side effects beyond tracing.
    pub fn generate(&self, request: &GenerateRequest) -> QuillResult<String> {
        request.validate()?;

        let template_name = request
            .template_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.default_template);

        tracing::info!(
            product = %request.product_name,
            template = template_name,
            "generating document"
        );

        let content = self.templates.content(template_name)?;
        let date = Utc::now().format("%Y-%m-%d").to_string();
        let document = fill_template(&content, request, &date);

        tracing::info!(product = %request.product_name, "document generated");
        Ok(document)
    }
}

/// Literal, global, case-sensitive substitution of the six tokens.
///
/// Tokens the template does not contain are never replaced, and tokens
/// this function does not know stay verbatim in the output — there is no
/// check that every placeholder was consumed.
pub fn fill_template(content: &str, request: &GenerateRequest, date: &str) -> String {
    let features = tokens::bullet_list(&request.core_features);
    let constraints = match &request.constraints {
        Some(list) if !list.is_empty() => tokens::bullet_list(list),
        _ => tokens::NO_CONSTRAINTS_TEXT.to_string(),
    };

    content
        .replace(tokens::PRODUCT_NAME, &request.product_name)
        .replace(tokens::PRODUCT_DESCRIPTION, &request.product_description)
        .replace(tokens::TARGET_AUDIENCE, &request.target_audience)
        .replace(tokens::CORE_FEATURES, &features)
        .replace(tokens::CONSTRAINTS, &constraints)
        .replace(tokens::DATE, date)
}
