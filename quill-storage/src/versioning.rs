//! On every template update, snapshot the outgoing content as a version row.

use chrono::Utc;
use rusqlite::Connection;
use uuid::Uuid;

use quill_core::errors::QuillResult;
use quill_core::models::{Template, TemplateVersion};

use crate::queries::version_ops;

/// Tracks template content evolution by creating version snapshots.
pub struct VersionTracker;

impl VersionTracker {
    /// Snapshot the current state of a template before an update
    /// overwrites it. The snapshot carries the version number the content
    /// was stored under.
    pub fn snapshot(conn: &Connection, template: &Template) -> QuillResult<()> {
        let row = TemplateVersion {
            id: Uuid::new_v4().to_string(),
            template_id: template.id.clone(),
            version: template.version,
            content: template.content.clone(),
            created_at: Utc::now(),
        };
        version_ops::insert_version(conn, &row)
    }
}
