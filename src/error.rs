//! Error types for Groundwork
//!
//! All modules use `GroundworkResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Groundwork operations
pub type GroundworkResult<T> = Result<T, GroundworkError>;

/// All errors that can occur in Groundwork
#[derive(Error, Debug)]
pub enum GroundworkError {
    // Provisioning step errors
    #[error("Step '{step}' failed with exit code {code}")]
    StepFailed { step: String, code: i32 },

    #[error("Step '{step}' could not start: {command}")]
    StepSpawn {
        step: String,
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Step '{step}' was terminated by a signal")]
    ProcessSignaled { step: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    // Cache directory errors
    #[error("Failed to create toolchain cache directory {path}: {source}")]
    CacheDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl GroundworkError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a step spawn error
    pub fn step_spawn(
        step: impl Into<String>,
        command: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::StepSpawn {
            step: step.into(),
            command: command.into(),
            source,
        }
    }

    /// Process exit code for this error.
    ///
    /// A failed step's exit code is propagated verbatim (clamped to the
    /// 1..=255 range `ExitCode` can carry); every other error exits 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::StepFailed { code, .. } => {
                if *code >= 1 && *code <= 255 {
                    *code as u8
                } else {
                    1
                }
            }
            _ => 1,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::StepSpawn { .. } => Some(
                "Check that the tool is installed and on PATH, or set [installer]/[browser] in .groundwork.toml",
            ),
            Self::ConfigInvalid { .. } => {
                Some("Run: groundwork init --force to regenerate a template")
            }
            _ => None,
        }
    }
}
