//! Integration tests for Groundwork

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;

    fn groundwork() -> Command {
        cargo_bin_cmd!("groundwork")
    }

    #[test]
    fn help_displays() {
        groundwork()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("provisioning runner"));
    }

    #[test]
    fn version_displays() {
        groundwork()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("groundwork"));
    }

    #[test]
    fn plan_table() {
        groundwork()
            .args(["--no-local", "plan"])
            .assert()
            .success()
            .stdout(
                predicate::str::contains("upgrade installer")
                    .and(predicate::str::contains("install dependencies"))
                    .and(predicate::str::contains("install headless browser")),
            );
    }

    #[test]
    fn plan_plain_shows_commands() {
        groundwork()
            .args(["--no-local", "plan", "--format", "plain"])
            .assert()
            .success()
            .stdout(
                predicate::str::contains("pip install -r requirements.txt")
                    .and(predicate::str::contains("playwright install chromium")),
            );
    }

    #[test]
    fn plan_json_parses() {
        let output = groundwork()
            .args(["--no-local", "plan", "--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["steps"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn init_creates_config() {
        let temp = tempfile::TempDir::new().unwrap();

        groundwork()
            .args(["init", "--path"])
            .arg(temp.path())
            .assert()
            .success();

        let content = std::fs::read_to_string(temp.path().join(".groundwork.toml")).unwrap();
        assert!(content.contains("[installer]"));
    }

    #[test]
    fn init_refuses_overwrite() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join(".groundwork.toml"), "existing").unwrap();

        groundwork()
            .args(["init", "--path"])
            .arg(temp.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn doctor_fails_without_manifest() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = temp.path().join("config.toml");
        std::fs::write(
            &config,
            "[installer]\nprogram = \"definitely-not-a-real-binary-kqzx\"\n",
        )
        .unwrap();

        groundwork()
            .current_dir(temp.path())
            .args(["--no-local", "-c"])
            .arg(&config)
            .arg("doctor")
            .assert()
            .failure()
            .stderr(predicate::str::contains("preflight"));
    }

    #[test]
    fn run_dry_run_executes_nothing() {
        let temp = tempfile::TempDir::new().unwrap();

        groundwork()
            .current_dir(temp.path())
            .args(["--no-local", "run", "--dry-run"])
            .assert()
            .success()
            .stdout(
                predicate::str::contains("nothing executed")
                    .and(predicate::str::contains("install dependencies")),
            );
    }
}

#[cfg(unix)]
mod provisioning_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use serial_test::serial;
    use std::path::{Path, PathBuf};

    fn groundwork() -> Command {
        cargo_bin_cmd!("groundwork")
    }

    /// Write an executable shell script into `dir`
    fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Write a config pointing the plan at stand-in tools
    fn write_config(dir: &Path, installer: &Path, helper: &Path) -> PathBuf {
        let config = dir.join("config.toml");
        std::fs::write(
            &config,
            format!(
                "[installer]\nprogram = \"{}\"\nself_upgrade = false\n\n[browser]\nhelper = \"{}\"\n",
                installer.display(),
                helper.display()
            ),
        )
        .unwrap();
        config
    }

    #[test]
    #[serial]
    fn run_succeeds_when_every_step_succeeds() {
        let temp = tempfile::TempDir::new().unwrap();
        let installer = write_script(temp.path(), "fake-pip", "touch installed.marker");
        let helper = write_script(temp.path(), "fake-playwright", "touch browser.marker");
        let config = write_config(temp.path(), &installer, &helper);

        groundwork()
            .current_dir(temp.path())
            .args(["--no-local", "-c"])
            .arg(&config)
            .arg("run")
            .assert()
            .success();

        assert!(temp.path().join("installed.marker").exists());
        assert!(temp.path().join("browser.marker").exists());
    }

    #[test]
    #[serial]
    fn failing_step_code_propagates_and_later_steps_never_run() {
        let temp = tempfile::TempDir::new().unwrap();
        let installer = write_script(temp.path(), "fake-pip", "exit 9");
        let helper = write_script(temp.path(), "fake-playwright", "touch browser.marker");
        let config = write_config(temp.path(), &installer, &helper);

        groundwork()
            .current_dir(temp.path())
            .args(["--no-local", "-c"])
            .arg(&config)
            .arg("run")
            .assert()
            .code(9)
            .stderr(predicate::str::contains("install dependencies"));

        // fail-fast: browser step never reached
        assert!(!temp.path().join("browser.marker").exists());
    }

    #[test]
    #[serial]
    fn cache_dir_exists_and_is_exported_before_installer_runs() {
        let temp = tempfile::TempDir::new().unwrap();
        let cache_dir = temp.path().join("toolchain-cache");
        // the installer itself asserts the contract
        let installer = write_script(
            temp.path(),
            "fake-pip",
            "[ -n \"$CARGO_HOME\" ] || exit 5\n[ -d \"$CARGO_HOME\" ] || exit 6",
        );
        let helper = write_script(temp.path(), "fake-playwright", "exit 0");
        let config = write_config(temp.path(), &installer, &helper);

        groundwork()
            .current_dir(temp.path())
            .args(["--no-local", "-c"])
            .arg(&config)
            .args(["run", "--cache-dir"])
            .arg(&cache_dir)
            .assert()
            .success();

        assert!(cache_dir.is_dir());
    }

    #[test]
    #[serial]
    fn skip_browser_flag_skips_helper() {
        let temp = tempfile::TempDir::new().unwrap();
        let installer = write_script(temp.path(), "fake-pip", "exit 0");
        let helper = write_script(temp.path(), "fake-playwright", "touch browser.marker");
        let config = write_config(temp.path(), &installer, &helper);

        groundwork()
            .current_dir(temp.path())
            .args(["--no-local", "-c"])
            .arg(&config)
            .args(["run", "--skip-browser"])
            .assert()
            .success();

        assert!(!temp.path().join("browser.marker").exists());
    }

    #[test]
    #[serial]
    fn with_deps_flag_reaches_helper() {
        let temp = tempfile::TempDir::new().unwrap();
        let installer = write_script(temp.path(), "fake-pip", "exit 0");
        // record the arguments the helper was invoked with
        let helper = write_script(temp.path(), "fake-playwright", "echo \"$@\" > helper.args");
        let config = write_config(temp.path(), &installer, &helper);

        groundwork()
            .current_dir(temp.path())
            .args(["--no-local", "-c"])
            .arg(&config)
            .args(["run", "--with-deps"])
            .assert()
            .success();

        let args = std::fs::read_to_string(temp.path().join("helper.args")).unwrap();
        assert!(args.contains("install --with-deps chromium"));
    }

    #[test]
    #[serial]
    fn missing_installer_fails_to_spawn() {
        let temp = tempfile::TempDir::new().unwrap();
        let helper = write_script(temp.path(), "fake-playwright", "exit 0");
        let missing = temp.path().join("no-such-tool");
        let config = write_config(temp.path(), &missing, &helper);

        groundwork()
            .current_dir(temp.path())
            .args(["--no-local", "-c"])
            .arg(&config)
            .arg("run")
            .assert()
            .failure()
            .stderr(predicate::str::contains("could not start"));
    }
}
