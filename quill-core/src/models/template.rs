use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reusable document skeleton with placeholder tokens.
///
/// The current row in the store — always the latest version. Historical
/// content lives in [`TemplateVersion`] snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// UUID v4 identifier.
    pub id: String,
    /// Unique lookup key.
    pub name: String,
    /// Human-readable purpose of the template.
    pub description: String,
    /// Markdown body containing `{{TOKEN}}` placeholders.
    pub content: String,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Starts at 1, strictly increases on every update.
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Immutable snapshot of a template's content as it was before an update.
/// Append-only: one row per historical update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateVersion {
    /// UUID v4 identifier of the snapshot row.
    pub id: String,
    /// The template this snapshot belongs to.
    pub template_id: String,
    /// The version number the snapshot content carried.
    pub version: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Caller-facing upsert payload. The store assigns id, version, and
/// timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateDraft {
    pub name: String,
    pub description: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TemplateDraft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            content: content.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// Listing projection of a template — everything but the content body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSummary {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub version: i64,
    pub updated_at: DateTime<Utc>,
}
