// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sprint lifecycle tests: `sb sprint list|show|start|end`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

#[test]
fn list_marks_current() {
    let temp = board_temp();
    let out = run_ok(&temp, &["sprint", "list"]);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(
        lines,
        [
            "* s-1: Sprint 1 (Mar 2, 2026 to Mar 16, 2026) [PLANNED]",
            "  s-0: Sprint 0 (Feb 2, 2026 to Feb 16, 2026) [COMPLETED]",
        ]
    );
}

#[yare::parameterized(
    before_start = { None, BEFORE_SPRINT, "Starts in 1 day" },
    in_window = { None, DURING_SPRINT, "Actions: start" },
    completed = { Some("s-0"), DURING_SPRINT, "Sprint Ended" },
)]
fn show_state(id: Option<&str>, now: &str, expected: &str) {
    let temp = board_temp();
    let mut args = vec!["sprint", "show", "--now", now];
    if let Some(id) = id {
        args.push(id);
    }
    assert!(run_ok(&temp, &args).contains(expected));
}

#[test]
fn show_rejects_bad_timestamp() {
    let temp = board_temp();
    sb().args(["sprint", "show", "--now", "tomorrow"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid timestamp"));
}

#[test]
fn start_then_end_persists() {
    let temp = board_temp();
    sb().args(["sprint", "start", "--now", DURING_SPRINT])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("Started s-1 (ACTIVE)\n");
    assert_eq!(read_board(&temp)["sprints"][0]["status"], "ACTIVE");

    assert!(run_ok(&temp, &["sprint", "show", "--now", "2026-03-18T09:00:00Z"])
        .contains("Overdue by 2 days"));

    sb().args(["sprint", "end"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("Ended s-1 (COMPLETED)\n");
    assert_eq!(read_board(&temp)["sprints"][0]["status"], "COMPLETED");
}

#[test]
fn start_before_window_fails() {
    let temp = board_temp();
    sb().args(["sprint", "start", "--now", BEFORE_SPRINT])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot start sprint s-1"));
    assert_eq!(read_board(&temp)["sprints"][0]["status"], "PLANNED");
}

#[test]
fn end_planned_fails() {
    let temp = board_temp();
    sb().args(["sprint", "end", "s-1"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("only active sprints can be ended"));
}

#[test]
fn unknown_sprint_fails() {
    let temp = board_temp();
    sb().args(["sprint", "show", "s-9"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("sprint not found: s-9"));
}
