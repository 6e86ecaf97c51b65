// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Shared fixtures for command and backend tests.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};

/// A board with three users (ada is admin), two sprints and four issues.
pub const SAMPLE_BOARD: &str = r#"{
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

/// Writes [`SAMPLE_BOARD`] into `dir` and returns its path.
pub fn write_board(dir: &Path) -> PathBuf {
    let path = dir.join("board.json");
    fs::write(&path, SAMPLE_BOARD).unwrap();
    path
}

/// An instant inside sprint s-1.
pub fn during_sprint() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 5, 12, 0, 0).unwrap()
}
