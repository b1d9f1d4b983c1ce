//! Built-in template set, seeded once into an empty store.

use chrono::Utc;
use rusqlite::Connection;
use uuid::Uuid;

use quill_core::errors::QuillResult;
use quill_core::models::Template;

use crate::queries::template_crud;

/// The "standard" PRD skeleton. Covers every placeholder token and the
/// section headings the validation rules look for.
const STANDARD_TEMPLATE: &str = "\
# {{PRODUCT_NAME}} — Product Requirements Document

*Generated on {{DATE}}*

## Introduction

{{PRODUCT_DESCRIPTION}}

## Target Users

{{TARGET_AUDIENCE}}

## Features

{{CORE_FEATURES}}

## Constraints

{{CONSTRAINTS}}

## Acceptance Criteria

Each feature above ships with its own acceptance criteria, agreed with
stakeholders before implementation starts.

## Timeline

To be established with the delivery team.
";

/// A shorter skeleton for early drafts.
const LIGHTWEIGHT_TEMPLATE: &str = "\
# {{PRODUCT_NAME}}

{{PRODUCT_DESCRIPTION}}

## Audience

{{TARGET_AUDIENCE}}

## Features

{{CORE_FEATURES}}

## Constraints

{{CONSTRAINTS}}
";

/// (name, description, content, tags) for each built-in template.
fn builtin_templates() -> Vec<(&'static str, &'static str, &'static str, Vec<String>)> {
    vec![
        (
            "standard",
            "Full PRD skeleton with all standard sections",
            STANDARD_TEMPLATE,
            vec!["prd".to_string(), "default".to_string()],
        ),
        (
            "lightweight",
            "Short PRD skeleton for early drafts",
            LIGHTWEIGHT_TEMPLATE,
            vec!["prd".to_string(), "draft".to_string()],
        ),
    ]
}

/// Seed the built-in templates if the table is empty. Idempotent: a
/// non-empty table (including one whose built-ins have since been edited)
/// is left untouched. Returns the number of rows inserted.
pub fn initialize_default_templates(conn: &Connection) -> QuillResult<usize> {
    if template_crud::count_templates(conn)? > 0 {
        tracing::debug!("templates table not empty, skipping seed");
        return Ok(0);
    }

    let now = Utc::now();
    let mut inserted = 0;
    for (name, description, content, tags) in builtin_templates() {
        let template = Template {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            content: content.to_string(),
            tags,
            version: 1,
            created_at: now,
            updated_at: now,
        };
        template_crud::insert_template(conn, &template)?;
        inserted += 1;
    }

    tracing::info!(count = inserted, "seeded default templates");
    Ok(inserted)
}
