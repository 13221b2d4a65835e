//! Configuration schema for Groundwork
//!
//! Configuration is stored at `~/.config/groundwork/config.toml`, with an
//! optional project-local `.groundwork.toml` overriding it field-wise.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Package installer settings
    pub installer: InstallerConfig,

    /// Headless browser install settings
    pub browser: BrowserConfig,

    /// Native build-toolchain cache settings
    pub toolchain_cache: ToolchainCacheConfig,
}

/// General application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
}

/// Package installer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallerConfig {
    /// Installer binary to invoke
    pub program: String,

    /// Upgrade the installer itself before installing dependencies
    pub self_upgrade: bool,

    /// Dependency manifest path, relative to the working directory
    pub manifest: PathBuf,

    /// Extra arguments appended to the dependency install invocation
    pub extra_args: Vec<String>,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            program: "pip".to_string(),
            self_upgrade: true,
            manifest: PathBuf::from("requirements.txt"),
            extra_args: vec![],
        }
    }
}

/// Headless browser install configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Helper binary that installs the browser engine
    pub helper: String,

    /// Browser engine variant to install
    pub engine: String,

    /// Also install OS-level shared libraries (requires elevated
    /// privileges on most build hosts)
    pub with_deps: bool,

    /// Skip the browser install step entirely
    pub skip: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            helper: "playwright".to_string(),
            engine: "chromium".to_string(),
            with_deps: false,
            skip: false,
        }
    }
}

/// Native build-toolchain cache configuration
///
/// Needed when a manifest dependency compiles native code during install
/// and the host filesystem is read-only outside the home directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainCacheConfig {
    /// Create and export the cache directory before installing
    pub enabled: bool,

    /// Cache directory (defaults to ~/.cargo when unset)
    pub dir: Option<PathBuf>,

    /// Environment variable exported to every subsequent step
    pub env_var: String,
}

impl Default for ToolchainCacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: None,
            env_var: "CARGO_HOME".to_string(),
        }
    }
}

impl ToolchainCacheConfig {
    /// Resolve the cache directory, falling back to ~/.cargo
    pub fn resolved_dir(&self) -> PathBuf {
        match &self.dir {
            Some(dir) => dir.clone(),
            None => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".cargo"),
        }
    }
}
