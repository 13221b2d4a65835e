//! Configuration management for Groundwork

pub mod schema;

pub use schema::Config;

use crate::error::{GroundworkError, GroundworkResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Conventional name of the project-local config file
pub const LOCAL_CONFIG_NAME: &str = ".groundwork.toml";

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager with default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("groundwork")
            .join("config.toml")
    }

    /// Find a project-local `.groundwork.toml`, walking up from `start`
    pub fn find_local_config(start: &Path) -> Option<PathBuf> {
        let mut dir = Some(start);
        while let Some(d) = dir {
            let candidate = d.join(LOCAL_CONFIG_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            dir = d.parent();
        }
        None
    }

    /// Load configuration, using defaults if the file does not exist
    pub async fn load(&self) -> GroundworkResult<Config> {
        if !self.config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path).await
    }

    /// Load the global config and overlay a project-local file on top.
    ///
    /// The merge is field-wise: keys present in the local file win, keys
    /// absent fall through to the global value (or the default).
    pub async fn load_merged(&self, local: Option<&Path>) -> GroundworkResult<Config> {
        let global = self.load().await?;

        let Some(local_path) = local else {
            return Ok(global);
        };

        let content = fs::read_to_string(local_path).await.map_err(|e| {
            GroundworkError::io(format!("reading config from {}", local_path.display()), e)
        })?;

        let local_value: toml::Value =
            toml::from_str(&content).map_err(|e| GroundworkError::ConfigInvalid {
                path: local_path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let mut merged = toml::Value::try_from(&global)?;
        merge_values(&mut merged, local_value);

        merged
            .try_into()
            .map_err(|e: toml::de::Error| GroundworkError::ConfigInvalid {
                path: local_path.to_path_buf(),
                reason: e.to_string(),
            })
    }

    /// Load configuration from a specific file
    pub async fn load_from_file(&self, path: &Path) -> GroundworkResult<Config> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            GroundworkError::io(format!("reading config from {}", path.display()), e)
        })?;

        toml::from_str(&content).map_err(|e| GroundworkError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Recursively merge `overlay` into `base`; overlay keys win
fn merge_values(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
