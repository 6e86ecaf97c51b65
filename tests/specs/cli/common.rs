// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Inside sprint s-1's date window.
pub const DURING_SPRINT: &str = "2026-03-05T12:00:00Z";
/// A day before sprint s-1 starts.
pub const BEFORE_SPRINT: &str = "2026-03-01T09:00:00Z";

pub const BOARD: &str = r#"{
  "organization": "org-1",
  "users": [
    {"id": "u-ada", "name": "Ada", "authId": "auth_ada"},
    {"id": "u-bob", "name": "Bob", "authId": "auth_bob"},
    {"id": "u-cy", "name": "Cy"}
  ],
  "members": [
    {"userId": "u-ada", "role": "admin"},
    {"userId": "u-bob", "role": "member"}
  ],
  "sprints": [
    {"id": "s-1", "name": "Sprint 1", "startDate": "2026-03-02T09:00:00Z", "endDate": "2026-03-16T09:00:00Z", "status": "PLANNED", "projectId": "p-1"},
    {"id": "s-0", "name": "Sprint 0", "startDate": "2026-02-02T09:00:00Z", "endDate": "2026-02-16T09:00:00Z", "status": "COMPLETED", "projectId": "p-1"}
  ],
  "issues": [
    {"id": "iss-1", "title": "Fix login", "status": "TODO", "priority": "HIGH",
     "assignee": {"id": "u-ada", "name": "Ada"}, "reporter": {"id": "u-bob", "name": "Bob", "authId": "auth_bob"},
     "projectId": "p-1", "sprintId": "s-1"},
    {"id": "iss-2", "title": "Add logout", "status": "IN_PROGRESS", "priority": "LOW",
     "assignee": {"id": "u-bob", "name": "Bob"}, "reporter": {"id": "u-ada", "name": "Ada", "authId": "auth_ada"},
     "projectId": "p-1", "sprintId": "s-1"},
    {"id": "iss-3", "title": "Dashboard widget", "status": "TODO", "priority": "MEDIUM",
     "reporter": {"id": "u-bob", "name": "Bob", "authId": "auth_bob"},
     "projectId": "p-1", "sprintId": "s-1"},
    {"id": "iss-4", "title": "Old cleanup", "status": "DONE", "priority": "LOW",
     "assignee": {"id": "u-ada", "name": "Ada"},
     "projectId": "p-1", "sprintId": "s-0"}
  ]
}"#;

pub fn sb() -> Command {
    let mut cmd = cargo_bin_cmd!("sb");
    cmd.env("NO_COLOR", "1").env_remove("SB_LOG");
    cmd
}

/// A temp directory holding `board.json`, with no config file.
pub fn board_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("board.json"), BOARD).unwrap();
    temp
}

/// A temp directory with `board.json` and a `.sprintboard.toml` acting as `user`.
pub fn configured_temp(user: &str) -> TempDir {
    let temp = board_temp();
    std::fs::write(
        temp.path().join(".sprintboard.toml"),
        format!("user = \"{}\"\norg = \"org-1\"\n", user),
    )
    .unwrap();
    temp
}

/// Run `sb` in `temp` and return stdout, asserting success.
pub fn run_ok(temp: &TempDir, args: &[&str]) -> String {
    let output = sb().args(args).current_dir(temp.path()).output().unwrap();
    assert!(
        output.status.success(),
        "sb {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Read the board back as JSON.
pub fn read_board(temp: &TempDir) -> serde_json::Value {
    let content = std::fs::read_to_string(temp.path().join("board.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}
