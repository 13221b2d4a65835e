//! Plan construction
//!
//! Lowers a resolved `Config` into the ordered step list the runner
//! executes. The same config always produces the same plan.

use crate::config::Config;
use crate::provision::step::{CommandStep, Step};
use serde::Serialize;

/// An ordered provisioning plan
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    /// Steps, in execution order
    pub steps: Vec<Step>,
}

impl Plan {
    /// Build the provisioning plan for a config.
    ///
    /// Step order is fixed: toolchain cache (when enabled), installer
    /// self-upgrade, dependency install, browser install. The cache
    /// directory's env var is exported to every step that follows it.
    pub fn build(config: &Config) -> Self {
        let mut steps = Vec::new();
        let mut exported_env: Vec<(String, String)> = Vec::new();

        if config.toolchain_cache.enabled {
            let dir = config.toolchain_cache.resolved_dir();
            let env_var = config.toolchain_cache.env_var.clone();
            exported_env.push((env_var.clone(), dir.display().to_string()));
            steps.push(Step::EnsureCacheDir { dir, env_var });
        }

        let installer = &config.installer;

        if installer.self_upgrade {
            let mut step = CommandStep::new(
                "upgrade installer",
                &installer.program,
                [
                    "install".to_string(),
                    "--upgrade".to_string(),
                    installer_package(&installer.program),
                ],
            );
            step.env = exported_env.clone();
            steps.push(Step::Exec(step));
        }

        let mut args = vec![
            "install".to_string(),
            "-r".to_string(),
            installer.manifest.display().to_string(),
        ];
        args.extend(installer.extra_args.iter().cloned());
        let mut step = CommandStep::new("install dependencies", &installer.program, args);
        step.env = exported_env.clone();
        steps.push(Step::Exec(step));

        if !config.browser.skip {
            let mut args = vec!["install".to_string()];
            if config.browser.with_deps {
                args.push("--with-deps".to_string());
            }
            args.push(config.browser.engine.clone());
            let mut step = CommandStep::new("install headless browser", &config.browser.helper, args);
            step.env = exported_env;
            steps.push(Step::Exec(step));
        }

        Self { steps }
    }

    /// Number of steps in the plan
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the plan is empty
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Package the self-upgrade step targets: the installer itself.
///
/// The configured program may be a path; only its final component names
/// the package.
fn installer_package(program: &str) -> String {
    std::path::Path::new(program)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.to_string())
}
