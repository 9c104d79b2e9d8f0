//! Reader configuration for msgram
//!
//! Configuration is an optional TOML file passed with `--config`. Every field
//! has a default, so an empty file is a valid configuration.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{MsgramError, Result};

pub use types::{KeyOrder, ReaderConfig, WeightSumMode};

impl ReaderConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MsgramError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                MsgramError::io_operation("read config", path.display(), e)
            }
        })?;
        let config: ReaderConfig = toml::from_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            weight_sum_mode = %config.weight_sum_mode,
            key_order = %config.key_order,
            "config_loaded"
        );
        Ok(config)
    }

    /// Load configuration from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MsgramError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
