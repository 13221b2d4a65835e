//! Provisioning step model
//!
//! A plan is an ordered list of steps. External invocations are opaque:
//! we record program, arguments and environment, never interpret output.

use serde::Serialize;
use std::path::PathBuf;

/// One external-tool invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandStep {
    /// Human-readable step name
    pub name: String,
    /// Program to invoke
    pub program: String,
    /// Arguments passed to the program
    pub args: Vec<String>,
    /// Extra environment variables for the subprocess
    pub env: Vec<(String, String)>,
}

impl CommandStep {
    /// Create a command step with no extra environment
    pub fn new(
        name: impl Into<String>,
        program: impl Into<String>,
        args: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args: args.into_iter().collect(),
            env: vec![],
        }
    }

    /// The full command line, for logging and error messages
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// A single step in a provisioning plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// Create the toolchain cache directory and export it to later steps
    EnsureCacheDir { dir: PathBuf, env_var: String },

    /// Invoke an external tool
    Exec(CommandStep),
}

impl Step {
    /// Human-readable step name
    pub fn name(&self) -> String {
        match self {
            Step::EnsureCacheDir { env_var, .. } => {
                format!("prepare toolchain cache ({env_var})")
            }
            Step::Exec(cmd) => cmd.name.clone(),
        }
    }

    /// What this step runs, for plan listings
    pub fn summary(&self) -> String {
        match self {
            Step::EnsureCacheDir { dir, env_var } => {
                format!("mkdir -p {} && export {}", dir.display(), env_var)
            }
            Step::Exec(cmd) => cmd.command_line(),
        }
    }
}
