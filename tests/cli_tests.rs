use assert_cmd::Command;
use predicates::prelude::*;

fn action() -> Command {
    let mut cmd = Command::cargo_bin("kodegen_bundler_innosetup").unwrap();
    cmd.env_remove("GITHUB_ACTIONS")
        .env_remove("GITHUB_WORKSPACE")
        .env_remove("INPUT_PATH")
        .env_remove("INPUT_OPTIONS")
        .env_remove("INPUT_INSTALL_LATEST")
        .env_remove("INPUT_INSTALLER_URL");
    cmd
}

#[test]
fn test_help_lists_inputs() {
    action()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--path"))
        .stdout(predicate::str::contains("--install-latest"));
}

#[test]
fn test_unknown_flag_is_a_reported_failure() {
    action()
        .arg("--bogus")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Invalid arguments: unexpected argument '--bogus'",
        ));
}

#[cfg(not(windows))]
#[test]
fn test_rejects_non_windows_host() {
    let workspace = tempfile::tempdir().unwrap();
    std::fs::write(workspace.path().join("setup.iss"), "[Setup]\n").unwrap();

    action()
        .env("INPUT_PATH", "setup.iss")
        .env("GITHUB_WORKSPACE", workspace.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "This action is only supported on Windows!",
        ));
}

#[cfg(not(windows))]
#[test]
fn test_failure_is_a_workflow_command_on_runners() {
    action()
        .env("GITHUB_ACTIONS", "true")
        .env("INPUT_PATH", "setup.iss")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "::error::This action is only supported on Windows!",
        ));
}

#[cfg(windows)]
#[test]
fn test_missing_workspace_variable() {
    action()
        .env("INPUT_PATH", "setup.iss")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("GITHUB_WORKSPACE is not defined."));
}
