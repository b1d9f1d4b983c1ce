//! # quill-validation
//!
//! Declarative content validation for generated documents.
//!
//! ## Shape
//! - A fixed registry of seven named rules, each a pure function
//!   `text -> outcome`, independent of the others.
//! - An engine that selects a subset by id (registry order, unknown ids
//!   silently dropped), runs each rule, and aggregates a pass/fail score.
//!
//! Nothing here persists; a report is a pure projection of the input text.

pub mod engine;
pub mod rules;

pub use engine::ValidationEngine;
pub use rules::ValidationRule;
