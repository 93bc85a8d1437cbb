use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CACHE_SIZE: usize = 500;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration of a [`crate::Merger`], read from JSON such as
/// `{ "cacheSize": 500 }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct MergeConfig {
    /// Number of merge results to memoise. Zero disables the cache.
    pub cache_size: usize,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            cache_size: DEFAULT_CACHE_SIZE,
        }
    }
}

impl MergeConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("Loading merge config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        assert_eq!(MergeConfig::default().cache_size, 500);
    }

    #[test]
    fn test_config_from_json() {
        let config = MergeConfig::from_json(r#"{ "cacheSize": 0 }"#).unwrap();
        assert_eq!(config.cache_size, 0);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        assert_eq!(MergeConfig::from_json("{}").unwrap(), MergeConfig::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result = MergeConfig::from_json(r#"{ "separator": "_" }"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = MergeConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Json(_))));

        let result = MergeConfig::from_json(r#"{ "cacheSize": -1 }"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = MergeConfig::from_file("/nonexistent/classmerge.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
