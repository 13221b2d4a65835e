//! Doctor command - preflight checks without mutation
//!
//! Probes the external tools the provisioning plan will invoke and the
//! files it will read. Nothing is installed or created here.

use crate::config::Config;
use crate::error::{GroundworkError, GroundworkResult};
use crate::ui::{self, TaskSpinner, UiContext};
use std::process::Stdio;
use tokio::process::Command;

/// Execute the doctor command
pub async fn execute(config: &Config) -> GroundworkResult<()> {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "Groundwork Doctor");

    let mut spinner = TaskSpinner::new(&ctx);
    spinner.start("Probing external tools...");
    let installer_version = probe_version(&config.installer.program).await;
    let browser_version = if config.browser.skip {
        None
    } else {
        probe_version(&config.browser.helper).await
    };
    spinner.clear();

    let mut failures = 0;
    let mut warnings = 0;

    ui::section(&ctx, "Tools");

    match installer_version {
        Some(version) => ui::step_ok_detail(&ctx, "Package installer", &version),
        None => {
            ui::step_error_detail(&ctx, "Package installer not found", &config.installer.program);
            failures += 1;
        }
    }

    if config.browser.skip {
        ui::remark(&ctx, "Browser install skipped by config");
    } else {
        match browser_version {
            Some(version) => ui::step_ok_detail(&ctx, "Browser helper", &version),
            None => {
                ui::step_error_detail(&ctx, "Browser helper not found", &config.browser.helper);
                failures += 1;
            }
        }
    }

    ui::section(&ctx, "Files");

    let manifest = &config.installer.manifest;
    if manifest.is_file() {
        ui::step_ok_detail(&ctx, "Manifest", &manifest.display().to_string());
    } else {
        ui::step_error_detail(&ctx, "Manifest not found", &manifest.display().to_string());
        failures += 1;
    }

    if config.toolchain_cache.enabled {
        let dir = config.toolchain_cache.resolved_dir();
        if dir.is_dir() {
            ui::step_ok_detail(&ctx, "Toolchain cache directory", &dir.display().to_string());
        } else {
            ui::step_warn_hint(
                &ctx,
                "Toolchain cache directory absent",
                "created at run time",
            );
            warnings += 1;
        }
    } else {
        ui::remark(&ctx, "Toolchain cache disabled");
    }

    if failures > 0 {
        return Err(GroundworkError::User(format!(
            "{failures} preflight check(s) failed"
        )));
    }

    if warnings > 0 {
        ui::outro_warn(&ctx, "Ready, with warnings");
    } else {
        ui::outro_success(&ctx, "Ready to provision");
    }
    Ok(())
}

/// Run `<tool> --version` and return its first output line
async fn probe_version(program: &str) -> Option<String> {
    let output = Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()
        .await;

    match output {
        Ok(out) if out.status.success() => {
            let stdout = String::from_utf8_lossy(&out.stdout);
            let first_line = stdout.lines().next().unwrap_or("unknown");
            Some(first_line.trim().to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn probe_missing_tool() {
        assert!(probe_version("definitely-not-a-real-binary-kqzx")
            .await
            .is_none());
    }

    #[tokio::test]
    async fn doctor_fails_without_tools() {
        let mut config = Config::default();
        config.installer.program = "definitely-not-a-real-binary-kqzx".to_string();
        config.browser.helper = "definitely-not-a-real-binary-kqzx".to_string();
        config.installer.manifest = "no-such-manifest.txt".into();

        let err = execute(&config).await.unwrap_err();
        assert!(err.to_string().contains("preflight"));
    }

    #[tokio::test]
    async fn doctor_passes_with_stand_in_tools() {
        let temp = tempfile::TempDir::new().unwrap();
        let manifest = temp.path().join("requirements.txt");
        std::fs::write(&manifest, "requests\n").unwrap();

        let mut config = Config::default();
        // `true` exits 0 for any argument
        config.installer.program = "true".to_string();
        config.browser.skip = true;
        config.installer.manifest = manifest;

        execute(&config).await.unwrap();
    }
}
