//! TTL-bounded template content cache.
//!
//! Lazy staleness only: entries expire after the TTL, there is no eviction
//! thread and no invalidation hook on store writes. A writer updating a
//! template does NOT purge the cache, so readers may observe the previous
//! content for up to one TTL after an update. That stale-read window is a
//! documented trade-off of the design, not a bug.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;

use quill_core::errors::QuillResult;
use quill_core::traits::ITemplateStorage;

/// In-memory template content cache, keyed by template name.
#[derive(Clone)]
pub struct TemplateCache {
    cache: Cache<String, String>,
}

impl TemplateCache {
    /// Create a cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(1024)
            .time_to_live(ttl)
            .build();
        Self { cache }
    }

    /// Get cached content by template name. None on miss or expiry.
    pub fn get(&self, name: &str) -> Option<String> {
        self.cache.get(name)
    }

    /// Insert content keyed by template name.
    pub fn insert(&self, name: String, content: String) {
        self.cache.insert(name, content);
    }

    /// Number of entries currently in the cache.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

/// The cache→store read path shared by the generator and the resource
/// layer: serve a live cache entry without touching the store, otherwise
/// fetch from the store and refresh the entry.
#[derive(Clone)]
pub struct CachedTemplates {
    store: Arc<dyn ITemplateStorage>,
    cache: TemplateCache,
}

impl CachedTemplates {
    pub fn new(store: Arc<dyn ITemplateStorage>, ttl: Duration) -> Self {
        Self {
            store,
            cache: TemplateCache::new(ttl),
        }
    }

    /// Resolve template content by name.
    pub fn content(&self, name: &str) -> QuillResult<String> {
        if let Some(content) = self.cache.get(name) {
            tracing::debug!(template = name, "serving cached template");
            return Ok(content);
        }

        let template = self.store.get_template(name)?;
        self.cache
            .insert(name.to_string(), template.content.clone());
        tracing::debug!(template = name, "template cached from store");
        Ok(template.content)
    }

    /// The underlying store, for operations that must bypass the cache.
    pub fn store(&self) -> &Arc<dyn ITemplateStorage> {
        &self.store
    }
}
