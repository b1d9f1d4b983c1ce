//! # quill-storage
//!
//! SQLite persistence for quill templates: connection pool, idempotent
//! migrations, versioned template CRUD, default-template seeding, and the
//! TTL-bounded template cache.

pub mod cache;
pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;
pub mod seed;
pub mod versioning;

pub use cache::{CachedTemplates, TemplateCache};
pub use engine::TemplateStore;

use quill_core::errors::{QuillError, StorageError};

/// Map a low-level SQLite failure into the workspace error type.
pub(crate) fn to_storage_err(message: impl Into<String>) -> QuillError {
    QuillError::Storage(StorageError::SqliteError {
        message: message.into(),
    })
}
