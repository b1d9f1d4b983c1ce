//! QuillRuntime — owns every component instance: store, cache, generator,
//! validator, config.
//!
//! An explicit value the boundary layer holds and passes around; nothing
//! here is process-global, which keeps every component testable in
//! isolation.

use std::sync::Arc;
use std::time::Duration;

use quill_core::config::QuillConfig;
use quill_core::errors::QuillResult;
use quill_core::traits::ITemplateStorage;
use quill_generation::DocumentGenerator;
use quill_storage::{CachedTemplates, TemplateStore};
use quill_validation::ValidationEngine;

/// The component graph behind the tool boundary.
pub struct QuillRuntime {
    pub store: Arc<TemplateStore>,
    pub templates: CachedTemplates,
    pub generator: DocumentGenerator,
    pub validator: ValidationEngine,
    pub config: QuillConfig,
}

impl QuillRuntime {
    /// Open the store (file-backed or in-memory per config), run
    /// migrations, seed the default templates, and wire up the components.
    ///
    /// Storage failures here are fatal: a runtime without a working schema
    /// must not serve requests.
    pub fn initialize(config: QuillConfig) -> QuillResult<Self> {
        let store = match &config.storage.db_path {
            Some(path) => TemplateStore::open(path)?,
            None => TemplateStore::open_in_memory()?,
        };
        store.initialize_default_templates()?;
        let store = Arc::new(store);

        let ttl = Duration::from_secs(config.cache.template_ttl_secs);
        let shared: Arc<dyn ITemplateStorage> = store.clone();
        let templates = CachedTemplates::new(shared, ttl);
        let generator = DocumentGenerator::new(templates.clone())
            .with_default_template(config.generation.default_template.clone());
        let validator = ValidationEngine::new();

        tracing::info!(
            db = ?config.storage.db_path,
            cache_ttl_secs = config.cache.template_ttl_secs,
            "quill runtime initialized"
        );

        Ok(Self {
            store,
            templates,
            generator,
            validator,
            config,
        })
    }
}
