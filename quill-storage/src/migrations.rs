//! Idempotent schema migrations, tracked via PRAGMA user_version.
//!
//! v1: templates + template_versions tables, UNIQUE index on template name,
//! index on the version table's template reference.

use rusqlite::Connection;

use quill_core::errors::{QuillError, QuillResult, StorageError};

/// Current schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Run all pending migrations. Safe to call on every startup.
pub fn run_migrations(conn: &Connection) -> QuillResult<()> {
    let current = user_version(conn)?;
    if current < 1 {
        v001_template_tables(conn)?;
        set_user_version(conn, 1)?;
        tracing::info!(from = current, to = 1, "schema migrated");
    }
    Ok(())
}

fn user_version(conn: &Connection) -> QuillResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| crate::to_storage_err(e.to_string()))
}

fn set_user_version(conn: &Connection, version: u32) -> QuillResult<()> {
    conn.pragma_update(None, "user_version", version)
        .map_err(|e| crate::to_storage_err(e.to_string()))
}

fn v001_template_tables(conn: &Connection) -> QuillResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS templates (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            content     TEXT NOT NULL,
            tags        TEXT NOT NULL DEFAULT '[]',
            version     INTEGER NOT NULL DEFAULT 1,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_templates_name ON templates(name);

        CREATE TABLE IF NOT EXISTS template_versions (
            id          TEXT PRIMARY KEY,
            template_id TEXT NOT NULL,
            version     INTEGER NOT NULL,
            content     TEXT NOT NULL,
            created_at  TEXT NOT NULL,
            FOREIGN KEY (template_id) REFERENCES templates(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_template_versions_template_id
            ON template_versions(template_id);
        ",
    )
    .map_err(|e| {
        QuillError::from(StorageError::MigrationFailed {
            version: 1,
            reason: e.to_string(),
        })
    })?;
    Ok(())
}
