//! Error taxonomy for the quill workspace.

mod storage_error;

pub use storage_error::StorageError;

/// Convenience alias used across every crate in the workspace.
pub type QuillResult<T> = Result<T, QuillError>;

/// Top-level error type. Subsystem errors convert into this via `#[from]`.
#[derive(Debug, thiserror::Error)]
pub enum QuillError {
    /// No template row matches the requested name.
    #[error("template not found: {name}")]
    TemplateNotFound { name: String },

    /// A caller-supplied argument is missing, empty, or malformed.
    #[error("invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl QuillError {
    /// Shorthand for building an `InvalidInput` error.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
