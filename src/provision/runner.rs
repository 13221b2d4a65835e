//! Sequential plan execution
//!
//! Steps run one at a time, in order, fail-fast: the first failing step
//! aborts the run and its exit code is surfaced verbatim. Tool output is
//! inherited, never captured or interpreted.

use crate::error::{GroundworkError, GroundworkResult};
use crate::provision::plan::Plan;
use crate::provision::step::{CommandStep, Step};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Executes individual plan steps.
///
/// The production implementation spawns subprocesses; tests substitute a
/// recording fake to verify ordering and fail-fast behavior.
#[async_trait]
pub trait StepExecutor {
    async fn execute(&self, step: &Step) -> GroundworkResult<()>;
}

/// Step executor backed by real subprocesses
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    async fn exec(&self, cmd: &CommandStep) -> GroundworkResult<()> {
        debug!("Executing: {}", cmd.command_line());

        let status = Command::new(&cmd.program)
            .args(&cmd.args)
            .envs(cmd.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| GroundworkError::step_spawn(&cmd.name, cmd.command_line(), e))?;

        if status.success() {
            return Ok(());
        }

        match status.code() {
            Some(code) => Err(GroundworkError::StepFailed {
                step: cmd.name.clone(),
                code,
            }),
            None => Err(GroundworkError::ProcessSignaled {
                step: cmd.name.clone(),
            }),
        }
    }
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StepExecutor for ProcessExecutor {
    async fn execute(&self, step: &Step) -> GroundworkResult<()> {
        match step {
            Step::EnsureCacheDir { dir, env_var } => {
                debug!("Creating cache directory {} ({})", dir.display(), env_var);
                tokio::fs::create_dir_all(dir)
                    .await
                    .map_err(|e| GroundworkError::CacheDirCreate {
                        path: dir.clone(),
                        source: e,
                    })
            }
            Step::Exec(cmd) => self.exec(cmd).await,
        }
    }
}

/// Runs a plan to completion or first failure
pub struct Runner<E: StepExecutor> {
    executor: E,
}

impl Runner<ProcessExecutor> {
    /// Runner backed by real subprocesses
    pub fn new() -> Self {
        Self {
            executor: ProcessExecutor::new(),
        }
    }
}

impl Default for Runner<ProcessExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: StepExecutor> Runner<E> {
    /// Runner with a custom executor
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// Execute every step in order, aborting on the first failure
    pub async fn run(&self, plan: &Plan) -> GroundworkResult<()> {
        let total = plan.len();
        for (i, step) in plan.steps.iter().enumerate() {
            info!("[{}/{}] {}", i + 1, total, step.name());
            self.executor.execute(step).await?;
        }
        Ok(())
    }
}
