//! TOML-backed configuration. Every section has full defaults, so an empty
//! string (or no config file at all) yields a working setup.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Storage section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the SQLite database file. None means in-memory.
    pub db_path: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { db_path: None }
    }
}

/// Template cache section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Time-to-live for cached template content (seconds).
    pub template_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            template_ttl_secs: constants::TEMPLATE_CACHE_TTL_SECS,
        }
    }
}

/// Generation section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Template used when a request names none.
    pub default_template: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            default_template: constants::DEFAULT_TEMPLATE_NAME.to_string(),
        }
    }
}

/// Top-level configuration for the quill service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuillConfig {
    pub storage: StorageConfig,
    pub cache: CacheConfig,
    pub generation: GenerationConfig,
}

impl QuillConfig {
    /// Parse a TOML string. Missing sections and fields fall back to
    /// defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = QuillConfig::from_toml("").unwrap();
        assert!(config.storage.db_path.is_none());
        assert_eq!(config.cache.template_ttl_secs, 300);
        assert_eq!(config.generation.default_template, "standard");
    }

    #[test]
    fn partial_toml_overrides_one_section() {
        let config = QuillConfig::from_toml(
            r#"
            [cache]
            template_ttl_secs = 60
            "#,
        )
        .unwrap();
        assert_eq!(config.cache.template_ttl_secs, 60);
        assert_eq!(config.generation.default_template, "standard");
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(QuillConfig::from_toml("cache = 5").is_err());
    }
}
