// tests/integration_test.rs
use std::process::Command;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gh-release-cut"))
}

#[test]
fn test_help() {
    let output = binary()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("gh-release-cut"));
    assert!(stdout.contains("--increment"));
    assert!(stdout.contains("--dry-run"));
}

#[test]
fn test_version() {
    let output = binary()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_token_exits_with_error() {
    let output = binary()
        .args(["--owner", "octo", "--repo", "widgets", "--config", "/dev/null"])
        .env_remove("GITHUB_TOKEN")
        .env_remove("GITHUB_OUTPUT")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("GITHUB_TOKEN is not set"));
}

#[test]
fn test_invalid_increment_exits_with_error() {
    let output = binary()
        .args(["--owner", "o", "--repo", "r", "--increment", "huge"])
        .args(["--config", "/dev/null"])
        .env("GITHUB_TOKEN", "t")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unknown increment"));
}
