use crate::errors::QuillResult;
use crate::models::{Template, TemplateDraft, TemplateSummary, TemplateVersion};

/// Template persistence: lookup + upsert + listing + history + seeding.
///
/// The generator and the resource layer only ever see this trait, so tests
/// can substitute an in-memory double for the SQLite engine.
pub trait ITemplateStorage: Send + Sync {
    /// Fetch the current row for `name`. Fails with
    /// [`QuillError::TemplateNotFound`](crate::QuillError::TemplateNotFound)
    /// when no row matches.
    fn get_template(&self, name: &str) -> QuillResult<Template>;

    /// Insert a new template at version 1, or update the existing row:
    /// snapshot the previous content into the version history, then
    /// overwrite content/description/tags and increment the version.
    fn put_template(&self, draft: &TemplateDraft) -> QuillResult<Template>;

    /// Summaries of every template, ordered by name.
    fn list_templates(&self) -> QuillResult<Vec<TemplateSummary>>;

    /// Version snapshots for `name`, newest first.
    fn template_history(&self, name: &str) -> QuillResult<Vec<TemplateVersion>>;

    /// Seed the built-in template set if the table is empty. Idempotent,
    /// safe to call on every startup. Returns the number inserted.
    fn initialize_default_templates(&self) -> QuillResult<usize>;
}
