//! Integration tests for the tool boundary: dispatch, structured errors,
//! resource reads, and runtime wiring.

use serde_json::json;

use quill_core::QuillConfig;
use quill_server::resources;
use quill_server::{call_tool, list_tools, QuillRuntime};

fn runtime() -> QuillRuntime {
    QuillRuntime::initialize(QuillConfig::default()).unwrap()
}

fn generate_args() -> serde_json::Value {
    json!({
        "productName": "Acme",
        "productDescription": "Widget",
        "targetAudience": "SMBs",
        "coreFeatures": ["Fast", "Cheap"],
        "constraints": [],
        "templateName": "standard",
    })
}

#[test]
fn generate_prd_returns_document_text() {
    let rt = runtime();
    let response = call_tool(&rt, "generate_prd", generate_args());

    assert!(!response.is_error, "unexpected error: {}", response.text);
    let lines: Vec<&str> = response.text.lines().collect();
    assert!(lines.contains(&"- Fast"));
    assert!(lines.contains(&"- Cheap"));
    assert!(response.text.contains("No specific constraints identified."));
}

#[test]
fn generate_prd_with_malformed_args_is_a_structured_error() {
    let rt = runtime();
    // productName missing entirely: a deserialization failure, not a panic.
    let response = call_tool(
        &rt,
        "generate_prd",
        json!({ "productDescription": "Widget" }),
    );
    assert!(response.is_error);
}

#[test]
fn generate_prd_with_empty_field_reports_invalid_input() {
    let rt = runtime();
    let mut args = generate_args();
    args["productName"] = json!("   ");
    let response = call_tool(&rt, "generate_prd", args);

    assert!(response.is_error);
    assert!(response.text.contains("productName"));
}

#[test]
fn generate_prd_with_missing_template_names_it() {
    let rt = runtime();
    let mut args = generate_args();
    args["templateName"] = json!("enterprise");
    let response = call_tool(&rt, "generate_prd", args);

    assert!(response.is_error);
    assert!(response.text.contains("enterprise"));
}

#[test]
fn validate_prd_returns_report_json() {
    let rt = runtime();
    let response = call_tool(
        &rt,
        "validate_prd",
        json!({ "prdContent": "# Acme\n## Introduction\nAcme is great.\n" }),
    );
    assert!(!response.is_error);

    let report: serde_json::Value = serde_json::from_str(&response.text).unwrap();
    assert_eq!(report["summary"]["total"], 7);
    assert_eq!(
        report["summary"]["failed"],
        json!(report["summary"]["total"].as_u64().unwrap()
            - report["summary"]["passed"].as_u64().unwrap())
    );
}

#[test]
fn validate_prd_honors_rule_filter_and_drops_unknown_ids() {
    let rt = runtime();
    let response = call_tool(
        &rt,
        "validate_prd",
        json!({
            "prdContent": "# Acme\n",
            "validationRules": ["has-product-name", "no-such-rule"],
        }),
    );
    assert!(!response.is_error);

    let report: serde_json::Value = serde_json::from_str(&response.text).unwrap();
    assert_eq!(report["summary"]["total"], 1);
    assert_eq!(report["summary"]["score"], 100);
    assert_eq!(report["results"][0]["rule"], "Has Product Name");
}

#[test]
fn validate_prd_rejects_empty_content() {
    let rt = runtime();
    let response = call_tool(&rt, "validate_prd", json!({ "prdContent": "" }));
    assert!(response.is_error);
    assert!(response.text.contains("prdContent"));
}

#[test]
fn list_validation_rules_returns_all_seven() {
    let rt = runtime();
    let response = call_tool(&rt, "list_validation_rules", json!({}));
    assert!(!response.is_error);

    let rules: Vec<serde_json::Value> = serde_json::from_str(&response.text).unwrap();
    assert_eq!(rules.len(), 7);
    assert_eq!(rules[0]["id"], "has-introduction");
}

#[test]
fn unknown_tool_is_a_structured_error() {
    let rt = runtime();
    let response = call_tool(&rt, "delete_everything", json!({}));
    assert!(response.is_error);
    assert_eq!(response.text, "Unknown tool: delete_everything");
}

#[test]
fn tool_listing_has_three_entries() {
    let names: Vec<&str> = list_tools().iter().map(|t| t.name).collect();
    assert_eq!(
        names,
        vec!["generate_prd", "validate_prd", "list_validation_rules"]
    );
}

#[test]
fn resource_read_serves_template_content() {
    let rt = runtime();
    let content = resources::read_resource(&rt, "prd://templates/standard").unwrap();
    assert_eq!(content.mime_type, "text/markdown");
    assert!(content.text.contains("{{PRODUCT_NAME}}"));
}

#[test]
fn resource_read_rejects_unsupported_uri() {
    let rt = runtime();
    let err = resources::read_resource(&rt, "file:///etc/passwd").unwrap_err();
    assert!(matches!(err, quill_core::QuillError::InvalidInput { .. }));

    let err = resources::read_resource(&rt, "prd://templates/").unwrap_err();
    assert!(matches!(err, quill_core::QuillError::InvalidInput { .. }));
}

#[test]
fn resource_read_missing_template_is_not_found() {
    let rt = runtime();
    let err = resources::read_resource(&rt, "prd://templates/ghost").unwrap_err();
    assert!(matches!(
        err,
        quill_core::QuillError::TemplateNotFound { name } if name == "ghost"
    ));
}

#[test]
fn resource_template_listing_describes_the_scheme() {
    let listing = resources::list_resource_templates();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].uri_template, "prd://templates/{templateName}");
}

#[test]
fn file_backed_runtime_persists_across_initialize() {
    let dir = tempfile::tempdir().unwrap();
    let toml = format!(
        "[storage]\ndb_path = \"{}\"\n",
        dir.path().join("quill.db").display()
    );
    let config = QuillConfig::from_toml(&toml).unwrap();

    {
        let rt = QuillRuntime::initialize(config.clone()).unwrap();
        let response = call_tool(&rt, "generate_prd", generate_args());
        assert!(!response.is_error);
    }

    // Second initialize re-runs migrations and the (idempotent) seed.
    let rt = QuillRuntime::initialize(config).unwrap();
    let content = resources::read_resource(&rt, "prd://templates/standard").unwrap();
    assert!(content.text.contains("{{CORE_FEATURES}}"));
}
