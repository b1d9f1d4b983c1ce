//! TemplateStore — owns the ConnectionPool, implements ITemplateStorage,
//! runs migrations on open.

use std::path::Path;

use chrono::Utc;
use rusqlite::Connection;
use uuid::Uuid;

use quill_core::errors::{QuillError, QuillResult};
use quill_core::models::{Template, TemplateDraft, TemplateSummary, TemplateVersion};
use quill_core::traits::ITemplateStorage;

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{template_crud, version_ops};
use crate::seed;
use crate::to_storage_err;
use crate::versioning::VersionTracker;

/// The template persistence engine. Owns the connection pool and provides
/// the full ITemplateStorage interface.
pub struct TemplateStore {
    pool: ConnectionPool,
}

impl TemplateStore {
    /// Open a store backed by a file on disk.
    pub fn open(path: &Path) -> QuillResult<Self> {
        let pool = ConnectionPool::open(path, ConnectionPool::default_read_pool_size())?;
        let store = Self { pool };
        store.initialize()?;
        Ok(store)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> QuillResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        let store = Self { pool };
        store.initialize()?;
        Ok(store)
    }

    /// Run migrations. Failures here are fatal to the caller — a store
    /// that cannot create its schema must not be used.
    fn initialize(&self) -> QuillResult<()> {
        self.pool.with_writer(migrations::run_migrations)
    }

    /// Access the connection pool (for advanced operations and tests).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }
}

impl ITemplateStorage for TemplateStore {
    fn get_template(&self, name: &str) -> QuillResult<Template> {
        self.pool
            .with_reader(|conn| template_crud::get_by_name(conn, name))?
            .ok_or_else(|| QuillError::TemplateNotFound {
                name: name.to_string(),
            })
    }

    fn put_template(&self, draft: &TemplateDraft) -> QuillResult<Template> {
        validate_draft(draft)?;
        self.pool.with_writer(|conn| {
            let tx = conn
                .unchecked_transaction()
                .map_err(|e| to_storage_err(format!("put_template begin: {e}")))?;

            match put_template_inner(&tx, draft) {
                Ok(template) => {
                    tx.commit()
                        .map_err(|e| to_storage_err(format!("put_template commit: {e}")))?;
                    Ok(template)
                }
                Err(e) => {
                    let _ = tx.rollback();
                    Err(e)
                }
            }
        })
    }

    fn list_templates(&self) -> QuillResult<Vec<TemplateSummary>> {
        self.pool.with_reader(template_crud::list_summaries)
    }

    fn template_history(&self, name: &str) -> QuillResult<Vec<TemplateVersion>> {
        self.pool.with_reader(|conn| {
            let template = template_crud::get_by_name(conn, name)?.ok_or_else(|| {
                QuillError::TemplateNotFound {
                    name: name.to_string(),
                }
            })?;
            version_ops::history_for(conn, &template.id)
        })
    }

    fn initialize_default_templates(&self) -> QuillResult<usize> {
        self.pool.with_writer(seed::initialize_default_templates)
    }
}

/// Upsert logic, operating on the provided transaction (via Deref).
/// Snapshot-then-overwrite on update; fresh row at version 1 on insert.
fn put_template_inner(conn: &Connection, draft: &TemplateDraft) -> QuillResult<Template> {
    match template_crud::get_by_name(conn, &draft.name)? {
        Some(existing) => {
            VersionTracker::snapshot(conn, &existing)?;
            let updated = Template {
                id: existing.id,
                name: existing.name,
                description: draft.description.clone(),
                content: draft.content.clone(),
                tags: draft.tags.clone(),
                version: existing.version + 1,
                created_at: existing.created_at,
                updated_at: Utc::now(),
            };
            template_crud::update_template(conn, &updated)?;
            tracing::debug!(name = %updated.name, version = updated.version, "template updated");
            Ok(updated)
        }
        None => {
            let now = Utc::now();
            let template = Template {
                id: Uuid::new_v4().to_string(),
                name: draft.name.clone(),
                description: draft.description.clone(),
                content: draft.content.clone(),
                tags: draft.tags.clone(),
                version: 1,
                created_at: now,
                updated_at: now,
            };
            template_crud::insert_template(conn, &template)?;
            tracing::debug!(name = %template.name, "template created");
            Ok(template)
        }
    }
}

/// A draft needs at least a name and a content body.
fn validate_draft(draft: &TemplateDraft) -> QuillResult<()> {
    if draft.name.trim().is_empty() {
        return Err(QuillError::invalid_input("name", "must not be empty"));
    }
    if draft.content.is_empty() {
        return Err(QuillError::invalid_input("content", "must not be empty"));
    }
    Ok(())
}
