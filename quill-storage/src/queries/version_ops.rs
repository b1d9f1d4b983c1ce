//! Append-only template version history.

use rusqlite::{params, Connection};

use quill_core::errors::QuillResult;
use quill_core::models::TemplateVersion;

use super::parse_dt;
use crate::to_storage_err;

/// Append a version snapshot row. Snapshots are never updated or deleted.
pub fn insert_version(conn: &Connection, snapshot: &TemplateVersion) -> QuillResult<()> {
    conn.execute(
        "INSERT INTO template_versions (id, template_id, version, content, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            snapshot.id,
            snapshot.template_id,
            snapshot.version,
            snapshot.content,
            snapshot.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// All snapshots for a template, newest first.
pub fn history_for(conn: &Connection, template_id: &str) -> QuillResult<Vec<TemplateVersion>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, template_id, version, content, created_at
             FROM template_versions WHERE template_id = ?1
             ORDER BY version DESC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![template_id], |row| Ok(row_to_version(row)))
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.into_iter().collect()
}

/// Number of snapshots for a template.
pub fn version_count(conn: &Connection, template_id: &str) -> QuillResult<usize> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM template_versions WHERE template_id = ?1",
            params![template_id],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

fn row_to_version(row: &rusqlite::Row<'_>) -> QuillResult<TemplateVersion> {
    let created_at_str: String = row.get(4).map_err(|e| to_storage_err(e.to_string()))?;
    Ok(TemplateVersion {
        id: row.get(0).map_err(|e| to_storage_err(e.to_string()))?,
        template_id: row.get(1).map_err(|e| to_storage_err(e.to_string()))?,
        version: row.get(2).map_err(|e| to_storage_err(e.to_string()))?,
        content: row.get(3).map_err(|e| to_storage_err(e.to_string()))?,
        created_at: parse_dt(&created_at_str)?,
    })
}
