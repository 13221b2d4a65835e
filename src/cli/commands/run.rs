//! Run command - execute the provisioning sequence

use crate::cli::args::RunArgs;
use crate::config::Config;
use crate::error::GroundworkResult;
use crate::provision::{Plan, Runner};
use crate::ui::{self, UiContext};
use tracing::debug;

/// Execute the run command
pub async fn execute(args: RunArgs, config: &Config) -> GroundworkResult<()> {
    let ctx = UiContext::detect();

    let config = apply_overrides(config.clone(), &args);
    let plan = Plan::build(&config);

    if args.dry_run {
        ui::intro(&ctx, "Groundwork provisioning (dry run)");
        for (i, step) in plan.steps.iter().enumerate() {
            ui::remark(&ctx, &format!("{}. {}: {}", i + 1, step.name(), step.summary()));
        }
        ui::outro_success(&ctx, &format!("{} step(s), nothing executed", plan.len()));
        return Ok(());
    }

    ui::intro(&ctx, "Groundwork provisioning");
    for (i, step) in plan.steps.iter().enumerate() {
        ui::remark(&ctx, &format!("{}. {}", i + 1, step.name()));
    }
    debug!("Resolved plan: {} step(s)", plan.len());

    // Tool output goes straight to our stdio; first failure aborts the
    // run and its exit code is propagated by main.
    Runner::new().run(&plan).await?;

    ui::outro_success(&ctx, "Environment provisioned");
    Ok(())
}

/// Fold CLI flags into the resolved config
fn apply_overrides(mut config: Config, args: &RunArgs) -> Config {
    if let Some(ref manifest) = args.manifest {
        config.installer.manifest = manifest.clone();
    }
    if args.skip_browser {
        config.browser.skip = true;
    }
    if args.with_deps {
        config.browser.with_deps = true;
    }
    if let Some(ref dir) = args.cache_dir {
        config.toolchain_cache.enabled = true;
        config.toolchain_cache.dir = Some(dir.clone());
    }
    config
}
