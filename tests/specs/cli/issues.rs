// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board listing tests: `sb issues`, `sb assignees`, `sb users`, completion.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

#[test]
fn issues_lists_current_sprint() {
    let temp = board_temp();
    sb().arg("issues")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Sprint 1 (Mar 2, 2026 to Mar 16, 2026)"))
        .stdout(predicate::str::contains("- [HIGH] (TODO, @Ada) iss-1: Fix login"))
        .stdout(predicate::str::contains("iss-3: Dashboard widget"))
        .stdout(predicate::str::contains("iss-4").not());
}

#[yare::parameterized(
    term_only = { &["-q", "log"], "iss-1\niss-2\n" },
    term_and_priority = { &["-q", "log", "-p", "high"], "iss-1\n" },
    assignee = { &["-a", "u-bob"], "iss-2\n" },
    two_assignees = { &["-a", "u-ada", "-a", "u-bob"], "iss-1\niss-2\n" },
    no_match = { &["-q", "zzz"], "" },
)]
fn issues_filters(flags: &[&str], expected: &str) {
    let temp = board_temp();
    let mut args = vec!["issues", "-o", "ids"];
    args.extend_from_slice(flags);
    assert_eq!(run_ok(&temp, &args), expected);
}

#[test]
fn issues_other_sprint() {
    let temp = board_temp();
    assert_eq!(run_ok(&temp, &["issues", "--sprint", "s-0", "-o", "ids"]), "iss-4\n");
}

#[test]
fn issues_empty_filter_message() {
    let temp = board_temp();
    sb().args(["issues", "-q", "zzz"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues match the current filters."));
}

#[test]
fn issues_invalid_priority_fails() {
    let temp = board_temp();
    sb().args(["issues", "-p", "critical"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid priority: 'critical'"));
}

#[test]
fn issues_json() {
    let temp = board_temp();
    let out = run_ok(&temp, &["issues", "-o", "json", "-p", "low"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["sprintId"], "s-1");
    assert_eq!(json["issues"][0]["id"], "iss-2");
}

#[test]
fn missing_board_fails_with_hint() {
    let temp = TempDir::new().unwrap();
    sb().arg("issues")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("board file not found"))
        .stderr(predicate::str::contains("hint: pass --board"));
}

#[test]
fn board_flag_points_elsewhere() {
    let temp = board_temp();
    let other = TempDir::new().unwrap();
    let board = temp.path().join("board.json");
    sb().args(["issues", "-o", "ids", "--board"])
        .arg(&board)
        .current_dir(other.path())
        .assert()
        .success()
        .stdout("iss-1\niss-2\niss-3\n");
}

#[test]
fn config_found_from_subdirectory() {
    let temp = configured_temp("u-ada");
    let nested = temp.path().join("a").join("b");
    std::fs::create_dir_all(&nested).unwrap();
    sb().args(["users", "-o", "ids"])
        .current_dir(&nested)
        .assert()
        .success()
        .stdout("u-ada\nu-bob\n");
}

#[test]
fn assignees_palette() {
    let temp = board_temp();
    assert_eq!(
        run_ok(&temp, &["assignees", "-a", "u-ada"]),
        "*[A] Ada (u-ada)\n [B] Bob (u-bob)\n"
    );
}

#[test]
fn users_requires_org() {
    let temp = board_temp();
    sb().arg("users")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no organization"));
}

#[test]
fn users_with_org_flag() {
    let temp = board_temp();
    sb().args(["users", "--org", "org-1"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("Ada (u-ada) admin\nBob (u-bob) member\n");
}

#[yare::parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
)]
fn completion_generates_non_empty_output(shell: &str) {
    let output = sb().args(["completion", shell]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sb"));
}
