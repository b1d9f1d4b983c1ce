//! # quill-server
//!
//! Request/response boundary for the quill service: named tool-call
//! dispatch (`generate_prd`, `validate_prd`, `list_validation_rules`),
//! template resource reads, and the runtime that owns every component
//! instance. The wire transport that delivers requests stays outside this
//! crate; handlers here never panic on caller input — failures become
//! structured error responses.

pub mod requests;
pub mod resources;
pub mod runtime;
pub mod tools;

pub use runtime::QuillRuntime;
pub use tools::{call_tool, list_tools, ToolResponse};
