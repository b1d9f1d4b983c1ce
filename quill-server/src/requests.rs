//! Wire-facing request payloads for the tool boundary.

use serde::{Deserialize, Serialize};

use quill_core::errors::{QuillError, QuillResult};

pub use quill_generation::GenerateRequest;

/// Arguments for `validate_prd` (camelCase on the wire).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    pub prd_content: String,
    #[serde(default)]
    pub validation_rules: Option<Vec<String>>,
}

impl ValidateRequest {
    /// Reject requests without document content.
    pub fn validate(&self) -> QuillResult<()> {
        if self.prd_content.is_empty() {
            return Err(QuillError::invalid_input("prdContent", "is required"));
        }
        Ok(())
    }
}
