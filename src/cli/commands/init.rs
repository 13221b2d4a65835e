//! Init command - create project-local .groundwork.toml

use crate::cli::args::InitArgs;
use crate::config::LOCAL_CONFIG_NAME;
use crate::error::{GroundworkError, GroundworkResult};
use crate::ui::{self, UiContext};
use std::path::Path;
use tokio::fs;

/// Template for project-local config
const INIT_TEMPLATE: &str = r#"# Groundwork project configuration
# Settings here override your global config (~/.config/groundwork/config.toml)

[installer]
# program = "pip"
# self_upgrade = true
# manifest = "requirements.txt"
# extra_args = ["--no-cache-dir"]

[browser]
# helper = "playwright"
# engine = "chromium"       # chromium, firefox, webkit
# with_deps = false         # OS libraries need elevated privileges
# skip = false

[toolchain_cache]
# enabled = true            # for manifest deps that compile native code
# dir = "/opt/render/project/.cargo"
# env_var = "CARGO_HOME"
"#;

/// Execute the init command
pub async fn execute(args: InitArgs) -> GroundworkResult<()> {
    let ctx = UiContext::detect();

    let target_dir = match args.path {
        Some(ref p) => p.clone(),
        None => std::env::current_dir()
            .map_err(|e| GroundworkError::io("getting current directory", e))?,
    };

    let config_path = target_dir.join(LOCAL_CONFIG_NAME);

    if config_path.exists() && !args.force {
        return Err(GroundworkError::User(format!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        )));
    }

    ensure_dir(&target_dir).await?;

    fs::write(&config_path, INIT_TEMPLATE)
        .await
        .map_err(|e| GroundworkError::io(format!("writing {}", config_path.display()), e))?;

    ui::step_ok_detail(
        &ctx,
        "Created project config",
        &config_path.display().to_string(),
    );

    Ok(())
}

async fn ensure_dir(dir: &Path) -> GroundworkResult<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .await
            .map_err(|e| GroundworkError::io(format!("creating directory {}", dir.display()), e))?;
    }
    Ok(())
}
