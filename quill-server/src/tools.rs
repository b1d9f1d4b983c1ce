//! Named tool-call dispatch.
//!
//! Handler failures never escape this module: malformed arguments, missing
//! templates, and storage errors all become structured failure responses.

use serde::Serialize;
use serde_json::Value;

use quill_core::errors::QuillResult;

use crate::requests::{GenerateRequest, ValidateRequest};
use crate::runtime::QuillRuntime;

pub const GENERATE_PRD: &str = "generate_prd";
pub const VALIDATE_PRD: &str = "validate_prd";
pub const LIST_VALIDATION_RULES: &str = "list_validation_rules";

/// Metadata for one dispatchable tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

/// The three tools this core dispatches.
pub fn list_tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: GENERATE_PRD,
            description: "Generate a product requirements document from a stored template",
        },
        ToolDescriptor {
            name: VALIDATE_PRD,
            description: "Validate document content against the rule registry",
        },
        ToolDescriptor {
            name: LIST_VALIDATION_RULES,
            description: "List the available validation rules",
        },
    ]
}

/// One tool-call result: text payload plus an error flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolResponse {
    pub text: String,
    pub is_error: bool,
}

impl ToolResponse {
    fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(message: impl std::fmt::Display) -> Self {
        Self {
            text: message.to_string(),
            is_error: true,
        }
    }
}

/// Dispatch one named tool call.
pub fn call_tool(runtime: &QuillRuntime, name: &str, args: Value) -> ToolResponse {
    tracing::debug!(tool = name, "tool call received");

    let result = match name {
        GENERATE_PRD => generate_prd(runtime, args),
        VALIDATE_PRD => validate_prd(runtime, args),
        LIST_VALIDATION_RULES => list_validation_rules(runtime),
        _ => {
            tracing::warn!(tool = name, "unknown tool requested");
            return ToolResponse::error(format!("Unknown tool: {name}"));
        }
    };

    match result {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(tool = name, error = %e, "tool call failed");
            ToolResponse::error(e)
        }
    }
}

fn generate_prd(runtime: &QuillRuntime, args: Value) -> QuillResult<ToolResponse> {
    let request: GenerateRequest = serde_json::from_value(args)?;
    let document = runtime.generator.generate(&request)?;
    Ok(ToolResponse::ok(document))
}

fn validate_prd(runtime: &QuillRuntime, args: Value) -> QuillResult<ToolResponse> {
    let request: ValidateRequest = serde_json::from_value(args)?;
    request.validate()?;

    let report = runtime
        .validator
        .validate(&request.prd_content, request.validation_rules.as_deref());
    Ok(ToolResponse::ok(serde_json::to_string_pretty(&report)?))
}

fn list_validation_rules(runtime: &QuillRuntime) -> QuillResult<ToolResponse> {
    let rules = runtime.validator.list_rules();
    Ok(ToolResponse::ok(serde_json::to_string_pretty(&rules)?))
}
