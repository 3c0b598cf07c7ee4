//! Tests for the command-line front-end, run against the built binary.

mod common;

use std::process::Command;

use common::free_port;
use common::mock_backend::{MockBackend, MockResponse};
use common::{envelope, student_json};
use serde_json::json;

fn roster_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_roster"));
    // Keep the user's own config file out of the picture.
    cmd.arg("--config").arg("/nonexistent/roster/config.toml");
    cmd.env_remove("ROSTER_LOG");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let output = roster_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["list", "show", "add", "edit", "delete", "--base-url"] {
        assert!(stdout.contains(name), "missing {} in help: {}", name, stdout);
    }
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    let output = roster_cmd().output().expect("Failed to execute command");
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_base_url_exits_with_error() {
    let output = roster_cmd()
        .args(["--base-url", "ftp://nowhere", "list"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("must use http or https"));
}

#[test]
fn test_unreachable_server_reports_fetch_failure() {
    let base_url = format!("http://127.0.0.1:{}", free_port());
    let output = roster_cmd()
        .args(["--base-url", &base_url, "list"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: Failed to fetch students"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_add_without_name_sends_nothing() {
    let base_url = format!("http://127.0.0.1:{}", free_port());
    let output = roster_cmd()
        .args(["--base-url", &base_url, "add", "--code", "A1"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Name is required"));
}

#[tokio::test]
async fn test_list_prints_rows() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(&envelope(json!([
        student_json("1", "Ann", "A1", true),
        student_json("2", "Bo", "B2", false),
    ]))))
    .await;

    let base_url = mock.base_url();
    let output = tokio::task::spawn_blocking(move || {
        roster_cmd()
            .args(["--base-url", &base_url, "list", "--active-only"])
            .output()
            .expect("Failed to execute command")
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Student Management"));
    assert!(stdout.contains("Ann"));
    assert!(!stdout.contains("Bo"));
}

#[tokio::test]
async fn test_delete_with_yes_skips_prompt() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(&envelope(json!([student_json(
        "1", "Ann", "A1", true
    )]))))
    .await;
    mock.enqueue_response(MockResponse::empty(200)).await;

    let base_url = mock.base_url();
    let output = tokio::task::spawn_blocking(move || {
        roster_cmd()
            .args(["--base-url", &base_url, "delete", "1", "--yes"])
            .output()
            .expect("Failed to execute command")
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].method, "DELETE");
    assert_eq!(requests[1].path, "/students/1");
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_config_path_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("roster");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[api]\nbase_url = \"ftp://from-default-config\"\n",
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_roster"))
        .env("XDG_CONFIG_HOME", dir.path())
        .env_remove("ROSTER_LOG")
        .arg("list")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("ftp://from-default-config"),
        "unexpected stderr: {}",
        stderr
    );
}

#[tokio::test]
async fn test_delete_of_unlisted_id_sends_no_delete() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(&envelope(json!([student_json(
        "1", "Ann", "A1", true
    )]))))
    .await;

    let base_url = mock.base_url();
    let output = tokio::task::spawn_blocking(move || {
        roster_cmd()
            .args(["--base-url", &base_url, "delete", "..", "--yes"])
            .output()
            .expect("Failed to execute command")
    })
    .await
    .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Student '..' not found"));

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
}
