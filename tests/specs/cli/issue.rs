// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-issue tests: `sb issue new|show|edit|delete`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

#[test]
fn new_creates_in_current_sprint() {
    let temp = configured_temp("u-bob");
    sb().args(["issue", "new", "Write docs", "-p", "urgent", "-a", "u-ada"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("Created iss-5: Write docs\n");

    let board = read_board(&temp);
    let created = &board["issues"][4];
    assert_eq!(created["sprintId"], "s-1");
    assert_eq!(created["priority"], "URGENT");
    assert_eq!(created["status"], "TODO");
    assert_eq!(created["reporter"]["id"], "u-bob");
    assert_eq!(created["assignee"]["id"], "u-ada");
}

#[test]
fn new_requires_user() {
    let temp = board_temp();
    sb().args(["issue", "new", "Write docs"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no acting user"));
}

#[test]
fn new_as_flag_overrides_config() {
    let temp = configured_temp("u-bob");
    run_ok(&temp, &["issue", "new", "T", "--as", "u-ada"]);
    assert_eq!(read_board(&temp)["issues"][4]["reporter"]["id"], "u-ada");
}

#[test]
fn new_rejects_non_member_assignee() {
    let temp = configured_temp("u-ada");
    sb().args(["issue", "new", "T", "-a", "u-cy"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("user not found: u-cy"));
}

#[test]
fn show_as_anonymous_is_read_only() {
    let temp = board_temp();
    sb().args(["issue", "show", "iss-1"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[iss-1] Fix login"))
        .stdout(predicate::str::contains("read-only"))
        .stdout(predicate::str::contains("Board: /project/p-1?sprint=s-1"));
}

#[test]
fn edit_by_reporter() {
    let temp = configured_temp("u-bob");
    sb().args(["issue", "edit", "iss-1", "--status", "in-review"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("- [HIGH] (IN_REVIEW, @Ada) iss-1: Fix login\n");
    assert_eq!(read_board(&temp)["issues"][0]["status"], "IN_REVIEW");
}

#[test]
fn edit_denied_for_non_reporter() {
    let temp = configured_temp("u-bob");
    sb().args(["issue", "edit", "iss-2", "-p", "urgent"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("permission denied"));
    assert_eq!(read_board(&temp)["issues"][1]["priority"], "LOW");
}

#[test]
fn edit_invalid_status() {
    let temp = configured_temp("u-ada");
    sb().args(["issue", "edit", "iss-1", "--status", "blocked"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid status: 'blocked'"));
}

#[test]
fn delete_by_admin() {
    let temp = configured_temp("u-ada");
    sb().args(["issue", "delete", "iss-2"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("Deleted iss-2\n");
    assert_eq!(run_ok(&temp, &["issues", "-o", "ids"]), "iss-1\niss-3\n");
}
