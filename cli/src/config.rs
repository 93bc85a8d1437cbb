use std::env;
use std::path::PathBuf;

use shared::{ConfigError, MergeConfig};

use crate::CliError;

/// Merger settings gathered from the environment and command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub cache_size: Option<usize>,
    pub config_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, CliError> {
        let cache_size = match env::var("CLASSMERGE_CACHE_SIZE") {
            Ok(value) => Some(
                value
                    .parse()
                    .map_err(|_| CliError::InvalidCacheSize(value.clone()))?,
            ),
            Err(_) => None,
        };
        Ok(Self {
            cache_size,
            config_path: env::var("CLASSMERGE_CONFIG").ok().map(PathBuf::from),
        })
    }

    /// Command line values replace environment values when given.
    pub fn with_overrides(self, cache_size: Option<usize>, config_path: Option<PathBuf>) -> Self {
        Self {
            cache_size: cache_size.or(self.cache_size),
            config_path: config_path.or(self.config_path),
        }
    }

    /// Loads the JSON config file, if any, and applies the cache size on top.
    pub fn into_merge_config(self) -> Result<MergeConfig, ConfigError> {
        let mut config = match &self.config_path {
            Some(path) => MergeConfig::from_file(path)?,
            None => MergeConfig::default(),
        };
        if let Some(cache_size) = self.cache_size {
            config.cache_size = cache_size;
        }
        Ok(config)
    }
}
