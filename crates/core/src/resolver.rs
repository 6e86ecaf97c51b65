// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sprint state resolution.
//!
//! Derives, for a sprint at a given instant, which lifecycle actions may be
//! offered and a short status annotation. The backend remains the authority
//! on whether a requested transition actually happens.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::humanize;
use crate::sprint::{Sprint, SprintStatus};

/// Annotation shown for completed sprints.
pub const SPRINT_ENDED: &str = "Sprint Ended";

/// What the board may offer for a sprint right now.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintActions {
    pub can_start: bool,
    pub can_end: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_annotation: Option<String>,
}

/// Returns true if `now` lies strictly inside the sprint's window.
pub fn in_window(sprint: &Sprint, now: DateTime<Utc>) -> bool {
    now > sprint.start_date && now < sprint.end_date
}

/// A planned sprint can only be started during its own window.
pub fn can_start(sprint: &Sprint, status: SprintStatus, now: DateTime<Utc>) -> bool {
    status == SprintStatus::Planned && in_window(sprint, now)
}

/// An active sprint can be ended at any time.
pub fn can_end(status: SprintStatus) -> bool {
    status == SprintStatus::Active
}

/// Annotation for a sprint with the given status at `now`.
pub fn status_annotation(
    sprint: &Sprint,
    status: SprintStatus,
    now: DateTime<Utc>,
) -> Option<String> {
    match status {
        SprintStatus::Completed => Some(SPRINT_ENDED.to_string()),
        SprintStatus::Active if now > sprint.end_date => Some(format!(
            "Overdue by {}",
            humanize::distance(now, sprint.end_date)
        )),
        SprintStatus::Planned if now < sprint.start_date => Some(format!(
            "Starts in {}",
            humanize::distance(sprint.start_date, now)
        )),
        _ => None,
    }
}

/// Resolves the actions for a sprint using its own status.
pub fn resolve_sprint_actions(sprint: &Sprint, now: DateTime<Utc>) -> SprintActions {
    resolve_with_status(sprint, sprint.status, now)
}

/// Resolves the actions using a status tracked separately from the sprint
/// record (e.g. one just confirmed by the backend).
pub fn resolve_with_status(
    sprint: &Sprint,
    status: SprintStatus,
    now: DateTime<Utc>,
) -> SprintActions {
    SprintActions {
        can_start: can_start(sprint, status, now),
        can_end: can_end(status),
        status_annotation: status_annotation(sprint, status, now),
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
