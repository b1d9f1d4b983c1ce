//! Template resource reads.
//!
//! `prd://templates/{templateName}` resolves through the same cache→store
//! path as the generator, so resource readers share its staleness window.

use serde::Serialize;

use quill_core::errors::{QuillError, QuillResult};

use crate::runtime::QuillRuntime;

pub const TEMPLATE_URI_PREFIX: &str = "prd://templates/";

/// Describes the template URI scheme to clients.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceTemplateDescriptor {
    pub uri_template: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub mime_type: &'static str,
}

pub fn list_resource_templates() -> Vec<ResourceTemplateDescriptor> {
    vec![ResourceTemplateDescriptor {
        uri_template: "prd://templates/{templateName}",
        name: "PRD Template",
        description: "Access product requirement document templates",
        mime_type: "text/markdown",
    }]
}

/// Resolved resource content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceContent {
    pub uri: String,
    pub text: String,
    pub mime_type: &'static str,
}

/// Resolve a resource URI to template content.
///
/// An unsupported scheme or an empty template name is invalid input; a
/// well-formed URI naming an absent template is the store's not-found.
pub fn read_resource(runtime: &QuillRuntime, uri: &str) -> QuillResult<ResourceContent> {
    let name = uri.strip_prefix(TEMPLATE_URI_PREFIX).ok_or_else(|| {
        QuillError::invalid_input("uri", format!("unsupported resource URI: {uri}"))
    })?;
    if name.is_empty() {
        return Err(QuillError::invalid_input(
            "uri",
            "template name not provided in URI",
        ));
    }

    tracing::debug!(template = name, "resource read");
    let text = runtime.templates.content(name)?;
    Ok(ResourceContent {
        uri: uri.to_string(),
        text,
        mime_type: "text/markdown",
    })
}
