//! Integration tests for init, new, edit, show, list and delete

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{devblog_cmd, init_workspace};

#[test]
fn test_init_creates_workspace() {
    let temp = TempDir::new().unwrap();

    devblog_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized devblog workspace"));

    assert!(temp.path().join(".devblog/config.toml").exists());
    assert!(temp.path().join(".devblog/posts.db").exists());

    let content = fs::read_to_string(temp.path().join(".devblog/config.toml")).unwrap();
    assert!(content.contains("json_export = \"devblog_posts.json\""));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    devblog_cmd().arg("init").arg(temp.path()).assert().failure();
}

#[test]
fn test_commands_outside_workspace_fail() {
    let temp = TempDir::new().unwrap();

    devblog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("devblog init"));
}

#[test]
fn test_list_empty() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    devblog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found"));
}

#[test]
fn test_new_then_show_round_trips_tags() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    devblog_cmd()
        .current_dir(temp.path())
        .args(["new", "--title", "Hello World", "--tags", "a, b, a", "--content", "# Hi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created post 1"));

    devblog_cmd()
        .current_dir(temp.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title:  Hello World"))
        .stdout(predicate::str::contains("Tags:   a, b, a"))
        .stdout(predicate::str::contains("Status: draft"))
        .stdout(predicate::str::contains("# Hi"));
}

#[test]
fn test_new_blank_title_saves_nothing() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    devblog_cmd()
        .current_dir(temp.path())
        .args(["new", "--title", "   ", "--content", "ignored"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    devblog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found"));
}

#[test]
fn test_new_reads_content_file() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    fs::write(temp.path().join("draft.md"), "## From file").unwrap();

    devblog_cmd()
        .current_dir(temp.path())
        .args(["new", "--title", "Filed", "--file", "draft.md"])
        .assert()
        .success();

    devblog_cmd()
        .current_dir(temp.path())
        .args(["show", "1", "--html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h2>From file</h2>"));
}

#[test]
fn test_new_invalid_status() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    devblog_cmd()
        .current_dir(temp.path())
        .args(["new", "--title", "x", "--status", "archived"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid status"));
}

#[test]
fn test_edit_updates_fields_and_list_shows_them() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    devblog_cmd()
        .current_dir(temp.path())
        .args(["new", "--title", "First draft"])
        .assert()
        .success();

    devblog_cmd()
        .current_dir(temp.path())
        .args(["edit", "1", "--title", "Final", "--status", "published"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved post 1"));

    let output = devblog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("published"));
    assert!(lines[0].ends_with("Final"));
}

#[test]
fn test_edit_unknown_post() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    devblog_cmd()
        .current_dir(temp.path())
        .args(["edit", "42", "--title", "x"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Post not found: 42"));
}

#[cfg(unix)]
#[test]
fn test_edit_with_external_editor() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    devblog_cmd()
        .current_dir(temp.path())
        .args(["new", "--title", "Edited", "--content", "before"])
        .assert()
        .success();

    // `true` exits without touching the scratch file, so content is unchanged
    devblog_cmd()
        .current_dir(temp.path())
        .env("EDITOR", "true")
        .args(["edit", "1", "--editor"])
        .assert()
        .success();

    assert!(!temp.path().join(".devblog/EDIT_1.md").exists());
    devblog_cmd()
        .current_dir(temp.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("before"));
}

#[test]
fn test_delete_removes_post() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    for title in ["Keep", "Remove"] {
        devblog_cmd()
            .current_dir(temp.path())
            .args(["new", "--title", title])
            .assert()
            .success();
    }

    devblog_cmd()
        .current_dir(temp.path())
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted post 2"));

    devblog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Keep"))
        .stdout(predicate::str::contains("Remove").not());

    // Ids are never reused
    devblog_cmd()
        .current_dir(temp.path())
        .args(["new", "--title", "Fresh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created post 3"));
}

#[test]
fn test_devblog_root_env() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    init_workspace(temp.path());

    devblog_cmd()
        .current_dir(elsewhere.path())
        .env("DEVBLOG_ROOT", temp.path())
        .args(["new", "--title", "Remote"])
        .assert()
        .success();

    devblog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remote"));
}

#[test]
fn test_config_get_set_list() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    devblog_cmd()
        .current_dir(temp.path())
        .args(["config", "json_export", "backup.json"])
        .assert()
        .success();

    devblog_cmd()
        .current_dir(temp.path())
        .args(["config", "json_export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("backup.json"));

    devblog_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("editor = "))
        .stdout(predicate::str::contains("archive_export = devblog_export.zip"));

    devblog_cmd()
        .current_dir(temp.path())
        .args(["config", "mode"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: 'mode'"));
}
