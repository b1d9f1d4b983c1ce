//! Insert, update, lookup, and listing for template rows.

use rusqlite::{params, Connection, OptionalExtension};

use quill_core::errors::{QuillError, QuillResult};
use quill_core::models::{Template, TemplateSummary};

use super::parse_dt;
use crate::to_storage_err;

/// Insert a brand-new template row (version 1).
pub fn insert_template(conn: &Connection, template: &Template) -> QuillResult<()> {
    let tags_json = serde_json::to_string(&template.tags)?;
    conn.execute(
        "INSERT INTO templates (
            id, name, description, content, tags, version, created_at, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            template.id,
            template.name,
            template.description,
            template.content,
            tags_json,
            template.version,
            template.created_at.to_rfc3339(),
            template.updated_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Overwrite an existing row with new content/description/tags and version.
pub fn update_template(conn: &Connection, template: &Template) -> QuillResult<()> {
    let tags_json = serde_json::to_string(&template.tags)?;
    let rows = conn
        .execute(
            "UPDATE templates SET
                description = ?2, content = ?3, tags = ?4, version = ?5, updated_at = ?6
             WHERE id = ?1",
            params![
                template.id,
                template.description,
                template.content,
                tags_json,
                template.version,
                template.updated_at.to_rfc3339(),
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    if rows == 0 {
        return Err(QuillError::TemplateNotFound {
            name: template.name.clone(),
        });
    }
    Ok(())
}

/// Look up the current row by name.
pub fn get_by_name(conn: &Connection, name: &str) -> QuillResult<Option<Template>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, name, description, content, tags, version, created_at, updated_at
             FROM templates WHERE name = ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let result = stmt
        .query_row(params![name], |row| Ok(row_to_template(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    result.transpose()
}

/// Summaries of every template, ordered by name.
pub fn list_summaries(conn: &Connection) -> QuillResult<Vec<TemplateSummary>> {
    let mut stmt = conn
        .prepare(
            "SELECT name, description, tags, version, updated_at
             FROM templates ORDER BY name",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| Ok(row_to_summary(row)))
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.into_iter().collect()
}

/// Number of template rows.
pub fn count_templates(conn: &Connection) -> QuillResult<i64> {
    conn.query_row("SELECT COUNT(*) FROM templates", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Parse a full row from the templates table.
pub(crate) fn row_to_template(row: &rusqlite::Row<'_>) -> QuillResult<Template> {
    let tags_json: String = row.get(4).map_err(|e| to_storage_err(e.to_string()))?;
    let tags: Vec<String> = serde_json::from_str(&tags_json)
        .map_err(|e| to_storage_err(format!("parse tags: {e}")))?;

    let created_at_str: String = row.get(6).map_err(|e| to_storage_err(e.to_string()))?;
    let updated_at_str: String = row.get(7).map_err(|e| to_storage_err(e.to_string()))?;

    Ok(Template {
        id: row.get(0).map_err(|e| to_storage_err(e.to_string()))?,
        name: row.get(1).map_err(|e| to_storage_err(e.to_string()))?,
        description: row.get(2).map_err(|e| to_storage_err(e.to_string()))?,
        content: row.get(3).map_err(|e| to_storage_err(e.to_string()))?,
        tags,
        version: row.get(5).map_err(|e| to_storage_err(e.to_string()))?,
        created_at: parse_dt(&created_at_str)?,
        updated_at: parse_dt(&updated_at_str)?,
    })
}

/// Parse a summary row (no content column).
fn row_to_summary(row: &rusqlite::Row<'_>) -> QuillResult<TemplateSummary> {
    let tags_json: String = row.get(2).map_err(|e| to_storage_err(e.to_string()))?;
    let tags: Vec<String> = serde_json::from_str(&tags_json)
        .map_err(|e| to_storage_err(format!("parse tags: {e}")))?;
    let updated_at_str: String = row.get(4).map_err(|e| to_storage_err(e.to_string()))?;

    Ok(TemplateSummary {
        name: row.get(0).map_err(|e| to_storage_err(e.to_string()))?,
        description: row.get(1).map_err(|e| to_storage_err(e.to_string()))?,
        tags,
        version: row.get(3).map_err(|e| to_storage_err(e.to_string()))?,
        updated_at: parse_dt(&updated_at_str)?,
    })
}
