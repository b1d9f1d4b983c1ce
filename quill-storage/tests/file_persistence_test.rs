//! Integration test: rows and version history survive a store reopen.

use quill_core::models::TemplateDraft;
use quill_core::traits::ITemplateStorage;
use quill_storage::TemplateStore;

#[test]
fn templates_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("quill.db");

    {
        let store = TemplateStore::open(&db_path).unwrap();
        store
            .put_template(&TemplateDraft::new("persisted", "desc", "v1 body"))
            .unwrap();
        store
            .put_template(&TemplateDraft::new("persisted", "desc", "v2 body"))
            .unwrap();
    }

    let reopened = TemplateStore::open(&db_path).unwrap();
    let template = reopened.get_template("persisted").unwrap();
    assert_eq!(template.version, 2);
    assert_eq!(template.content, "v2 body");

    let history = reopened.template_history("persisted").unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].content, "v1 body");
}

#[test]
fn migrations_are_idempotent_across_reopens() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("quill.db");

    for _ in 0..3 {
        let store = TemplateStore::open(&db_path).unwrap();
        store.initialize_default_templates().unwrap();
    }

    let store = TemplateStore::open(&db_path).unwrap();
    let summaries = store.list_templates().unwrap();
    // Seeded once; reopen + reseed never duplicates.
    assert_eq!(summaries.iter().filter(|s| s.name == "standard").count(), 1);
    assert!(summaries.iter().all(|s| s.version == 1));
}
