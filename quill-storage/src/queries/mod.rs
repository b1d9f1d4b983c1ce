//! SQL query modules. Each function takes an open connection and maps
//! driver errors into the workspace error type.

pub mod template_crud;
pub mod version_ops;

use chrono::{DateTime, Utc};

use quill_core::errors::QuillResult;

use crate::to_storage_err;

/// Parse an RFC 3339 timestamp column.
pub(crate) fn parse_dt(s: &str) -> QuillResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("parse datetime '{s}': {e}")))
}
